//! json-bootstrap: load a JSON config file named on the command line
//!
//! A host program parses [`BootstrapArgs`] once at startup, turns them into an
//! immutable [`Settings`] value and hands that to whatever needs to load its
//! configuration:
//!
//! ```no_run
//! use json_bootstrap::Settings;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct ServerConfig {
//!     port: u16,
//!     host: String,
//! }
//!
//! fn main() -> anyhow::Result<()> {
//!     let settings = Settings::init();
//!     json_bootstrap::cli::init_logging(settings.debug());
//!
//!     let mut config = ServerConfig { port: 0, host: "localhost".into() };
//!     settings.load(&mut config)?;
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod utils;

pub use config::{load_direct, ConfigError, SourceLocation};
pub use domain::{BootstrapArgs, Settings};
