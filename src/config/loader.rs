//! Config file loading

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::error::Category;
use serde_json::Value;
use std::fs::{self, File};
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use super::error::{ConfigError, Result};
use super::merge::{self, NullPolicy};
use super::{location, LOG_TARGET};
use crate::utils::paths::absolutize;

/// Load the JSON config file at `path` into `dest`.
///
/// Fields present in the file overwrite the matching fields of `dest`;
/// fields the file does not mention keep their current value. Every failure
/// is logged at ERROR on the `config.init` target before it is returned.
pub fn load_direct<T>(path: impl AsRef<Path>, dest: &mut T) -> Result<()>
where
    T: Serialize + DeserializeOwned,
{
    let path = path.as_ref();
    if path.as_os_str().is_empty() {
        return Err(fatal(ConfigError::MissingPath));
    }

    let config_file = absolutize(path)
        .map_err(|source| fatal(ConfigError::Unresolvable { path: path.to_path_buf(), source }))?;
    tracing::debug!(target: LOG_TARGET, "Resolved config path {}", config_file.display());

    // A missing file is left for the open below to report.
    match fs::metadata(&config_file) {
        Err(source) if source.kind() != io::ErrorKind::NotFound => {
            return Err(fatal(ConfigError::Stat { path: config_file, source }));
        }
        Ok(meta) if meta.is_dir() => {
            return Err(fatal(ConfigError::IsDirectory { path: config_file }));
        }
        _ => {}
    }

    let mut file = File::open(&config_file)
        .map_err(|source| fatal(ConfigError::Open { path: config_file.clone(), source }))?;
    let mut content = Vec::new();
    file.read_to_end(&mut content)
        .map_err(|source| fatal(ConfigError::Read { path: config_file.clone(), source }))?;
    tracing::debug!(target: LOG_TARGET, "Read {} bytes from {}", content.len(), config_file.display());

    let document = parse_document(&config_file, &content)?;
    *dest = apply_document(&config_file, dest, document)?;

    tracing::info!(target: LOG_TARGET, "Config loaded from '{}'.", config_file.display());
    Ok(())
}

/// Parse raw bytes as JSON, turning syntax errors into located diagnostics.
///
/// The offending line is echoed to stdout and attached to the error event.
fn parse_document(config_file: &Path, content: &[u8]) -> Result<Value> {
    let err = match serde_json::from_slice::<Value>(content) {
        Ok(document) => return Ok(document),
        Err(err) => err,
    };

    if matches!(err.classify(), Category::Syntax | Category::Eof) {
        if let Some((location, line_text)) = location::resolve(content, &err) {
            println!("{}", line_text);
            return Err(fatal(ConfigError::Syntax {
                path: config_file.to_path_buf(),
                location,
                line_text,
            }));
        }
    }

    Err(fatal(ConfigError::Unmarshal { path: config_file.to_path_buf(), source: err }))
}

/// Overlay `document` onto the current state of `dest` and rebuild it.
///
/// Nulls first replace what they land on, so optional fields can be cleared.
/// If that does not fit `T`, the overlay is redone with nulls leaving the
/// destination's values in place; the first error is reported if both fail.
fn apply_document<T>(config_file: &Path, dest: &T, document: Value) -> Result<T>
where
    T: Serialize + DeserializeOwned,
{
    let unmarshal = |source: serde_json::Error| {
        fatal(ConfigError::Unmarshal { path: PathBuf::from(config_file), source })
    };

    let current = serde_json::to_value(dest).map_err(unmarshal)?;
    let retry = merge::contains_null(&document).then(|| (current.clone(), document.clone()));

    let mut merged = current;
    merge::overlay(&mut merged, document, NullPolicy::Replace);
    let err = match serde_json::from_value(merged) {
        Ok(loaded) => return Ok(loaded),
        Err(err) => err,
    };

    if let Some((mut merged, document)) = retry {
        merge::overlay(&mut merged, document, NullPolicy::Keep);
        if let Ok(loaded) = serde_json::from_value(merged) {
            tracing::debug!(target: LOG_TARGET, "Ignored nulls that do not fit their fields");
            return Ok(loaded);
        }
    }

    Err(unmarshal(err))
}

/// Log a failure on the config target and hand it back for propagation.
fn fatal(err: ConfigError) -> ConfigError {
    if let ConfigError::Syntax { line_text, .. } = &err {
        tracing::error!(target: LOG_TARGET, line = %line_text, "{}", err);
        return err;
    }
    match std::error::Error::source(&err) {
        Some(cause) => tracing::error!(target: LOG_TARGET, cause = %cause, "{}", err),
        None => tracing::error!(target: LOG_TARGET, "{}", err),
    }
    err
}
