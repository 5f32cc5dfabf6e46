//! Command-line interface for json-bootstrap
//!
//! Loads the `--config` file into an untyped JSON document and optionally
//! prints it back.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::domain::{BootstrapArgs, Settings};

/// Load a JSON config file and report where it breaks
#[derive(Parser)]
#[command(name = "json-bootstrap")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    bootstrap: BootstrapArgs,

    /// Print the loaded document as pretty JSON
    #[arg(short, long)]
    print: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let settings = Settings::from(cli.bootstrap);
    init_logging(settings.debug());

    let mut document = serde_json::Value::Null;
    settings.load(&mut document)?;

    if cli.print {
        let rendered = serde_json::to_string_pretty(&document)?;
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}", rendered).context("Failed writing config to stdout")?;
    }

    Ok(())
}

/// Install the stderr tracing subscriber.
///
/// A valid RUST_LOG is used as-is. Without one, `debug` selects DEBUG and
/// otherwise INFO, so the load status stays visible.
pub fn init_logging(debug: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(fallback_level(debug).into()));
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}

fn fallback_level(debug: bool) -> Level {
    if debug {
        Level::DEBUG
    } else {
        Level::INFO
    }
}
