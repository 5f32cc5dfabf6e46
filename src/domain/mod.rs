//! Process-wide bootstrap state

pub mod settings;

pub use settings::{BootstrapArgs, Settings};
