#![deny(missing_docs)]

//! # Logging
//!
//! Installs the `tracing` subscriber. Logs go to stderr so the document can be
//! piped from stdout.

use crate::error::{CliError, CliResult};
use tracing_subscriber::EnvFilter;

/// Installs a formatted subscriber filtered by `directives`
/// (`info`, `debug`, `help2oas_core=trace,warn`, ...).
pub fn init(directives: &str) -> CliResult<()> {
    let filter = EnvFilter::try_new(directives)
        .map_err(|e| CliError::General(format!("invalid log filter '{}': {}", directives, e)))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| CliError::General(format!("failed to initialize logging: {}", e)))
}
