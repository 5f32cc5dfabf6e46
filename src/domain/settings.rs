//! Startup settings parsed from the command line

use clap::Parser;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::config::{self, load_direct};

/// Bootstrap flags shared by every program that loads a config file.
///
/// Flatten into a host parser with `#[command(flatten)]`, or parse on its own
/// through [`Settings::init`].
#[derive(Parser, Debug, Clone, Default)]
pub struct BootstrapArgs {
    /// Location of the configuration JSON
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,
}

/// Immutable bootstrap context, built once at startup and passed by reference.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    config_path: PathBuf,
    debug: bool,
}

impl Settings {
    pub fn new(config_path: impl Into<PathBuf>, debug: bool) -> Self {
        Self { config_path: config_path.into(), debug }
    }

    /// Parse the process arguments. Exits with clap's usage error on bad flags.
    pub fn init() -> Self {
        BootstrapArgs::parse().into()
    }

    pub fn try_from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        BootstrapArgs::try_parse_from(args).map(Self::from)
    }

    /// Configured config file path; empty when `--config` was not given.
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn debug(&self) -> bool {
        self.debug
    }

    /// Load the configured file into `dest`. See [`load_direct`].
    pub fn load<T>(&self, dest: &mut T) -> config::Result<()>
    where
        T: Serialize + DeserializeOwned,
    {
        load_direct(&self.config_path, dest)
    }
}

impl From<BootstrapArgs> for Settings {
    fn from(args: BootstrapArgs) -> Self {
        Self { config_path: args.config.unwrap_or_default(), debug: args.debug }
    }
}
