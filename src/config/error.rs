//! Error types for config loading.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use super::location::SourceLocation;

/// Result type alias for config loading.
pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("--config is required")]
    MissingPath,

    #[error("--config value '{}' does not resolve", .path.display())]
    Unresolvable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("--config value '{}' does not stat or is a directory", .path.display())]
    Stat {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("--config value '{}' does not stat or is a directory", .path.display())]
    IsDirectory { path: PathBuf },

    #[error("failure opening --config file '{}'", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failure reading --config file '{}'", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Malformed JSON. `line_text` is the offending source line, without its newline.
    #[error("JSON parse error at {location}")]
    Syntax {
        path: PathBuf,
        location: SourceLocation,
        line_text: String,
    },

    #[error("loading config failed on unmarshal")]
    Unmarshal {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl ConfigError {
    /// Path the failure relates to, if one had been given.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            ConfigError::MissingPath => None,
            ConfigError::Unresolvable { path, .. }
            | ConfigError::Stat { path, .. }
            | ConfigError::IsDirectory { path }
            | ConfigError::Open { path, .. }
            | ConfigError::Read { path, .. }
            | ConfigError::Syntax { path, .. }
            | ConfigError::Unmarshal { path, .. } => Some(path),
        }
    }
}
