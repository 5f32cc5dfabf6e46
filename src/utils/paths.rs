//! Path normalization

use std::io;
use std::path::{Path, PathBuf};

/// Make `path` absolute against the current working directory.
///
/// Does not touch the filesystem beyond reading the working directory, so the
/// target need not exist and symlinks are not followed.
pub fn absolutize(path: &Path) -> io::Result<PathBuf> {
    std::path::absolute(path)
}
