//! Configuration loading
//!
//! Resolves a config file path, reads it and deserializes the JSON document
//! onto a caller-supplied destination. Fields absent from the document keep
//! whatever value the destination already held.

pub mod error;
pub mod loader;
pub mod location;
pub mod merge;

pub use error::{ConfigError, Result};
pub use loader::load_direct;
pub use location::SourceLocation;

/// Tracing target shared by every event the loader emits.
pub const LOG_TARGET: &str = "config.init";
