//! Seatview CLI entrypoint for sharing theater seat-view reviews.

use std::io::{self, Write};
use std::process::ExitCode;

use ortho_config::OrthoConfig;
use seatview::{ClientError, SeatviewConfig};
use tracing_subscriber::EnvFilter;

mod cli;

/// Environment variable holding the log filter directives.
const LOG_ENV: &str = "SEATVIEW_LOG";

#[tokio::main]
async fn main() -> ExitCode {
    init_logging();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), ClientError> {
    let config = load_config()?;
    tracing::debug!(mode = ?config.operation_mode(), "configuration loaded");
    cli::submit::run(&config).await
}

/// Initialises logging to stderr, filtered by `SEATVIEW_LOG`.
fn init_logging() {
    let filter = EnvFilter::builder()
        .with_default_directive(tracing::Level::WARN.into())
        .with_env_var(LOG_ENV)
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`ClientError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<SeatviewConfig, ClientError> {
    SeatviewConfig::load().map_err(|error| ClientError::Configuration {
        message: error.to_string(),
    })
}
