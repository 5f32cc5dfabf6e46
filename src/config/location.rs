//! Line/column resolution for JSON syntax errors
//!
//! serde_json reports a 1-based line and a 1-based byte column. Both are folded
//! into a single byte offset and then mapped back over the raw content by
//! accumulating line lengths. A line contributes its byte length plus one for
//! the newline, so columns are byte offsets into the line and stay accurate
//! for multi-byte UTF-8 content.

use std::fmt;

/// Position of a syntax error in a config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    /// 1-based line number.
    pub line: usize,
    /// Byte offset from the start of the line.
    pub column: usize,
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Byte offset of a parser-reported `(line, column)` pair within `content`.
///
/// Returns `None` when `line` is past the end of the content.
pub fn offset_of(content: &[u8], line: usize, column: usize) -> Option<usize> {
    let line_index = line.checked_sub(1)?;
    let mut start = 0;
    for (index, text) in content.split(|&b| b == b'\n').enumerate() {
        if index == line_index {
            return Some(start + column.saturating_sub(1));
        }
        start += text.len() + 1;
    }
    None
}

/// Map a byte offset onto the line containing it.
///
/// Returns the location and the text of that line, or `None` if the offset
/// lies beyond the last line.
pub fn locate(content: &[u8], offset: usize) -> Option<(SourceLocation, String)> {
    let mut seen = 0;
    for (index, text) in content.split(|&b| b == b'\n').enumerate() {
        if offset <= seen + text.len() + 1 {
            let location = SourceLocation { line: index + 1, column: offset - seen };
            return Some((location, String::from_utf8_lossy(text).into_owned()));
        }
        seen += text.len() + 1;
    }
    None
}

/// Resolve a serde_json error position against the content it came from.
pub fn resolve(content: &[u8], err: &serde_json::Error) -> Option<(SourceLocation, String)> {
    let offset = offset_of(content, err.line(), err.column())?;
    locate(content, offset)
}
