//! json-bootstrap: check that a JSON config file loads
//!
//! Resolves `--config`, reads it and reports where a syntax error sits.

use anyhow::Result;

fn main() -> Result<()> {
    json_bootstrap::cli::run()
}
