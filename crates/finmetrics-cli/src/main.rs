mod cli;
mod commands;
mod error;
mod output;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::error::CliError;

const DEFAULT_LOG_FILTER: &str = "warn";

fn main() {
    if let Err(error) = run() {
        eprintln!("error: {error}");
        std::process::exit(i32::from(error.exit_code()));
    }
}

fn run() -> Result<(), CliError> {
    let cli = Cli::parse();
    init_logging(cli.log_level.as_deref())?;

    let envelope = commands::run(&cli)?;
    output::render(&envelope, cli.format, cli.pretty)?;

    if cli.strict && !envelope.is_clean() {
        return Err(CliError::StrictModeViolation {
            warning_count: envelope.meta.warnings.len(),
            error_count: envelope.errors.len(),
        });
    }

    if !envelope.errors.is_empty() {
        return Err(CliError::ResponseErrors {
            error_count: envelope.errors.len(),
        });
    }

    Ok(())
}

/// Logs go to stderr; stdout carries only the rendered envelope.
fn init_logging(level: Option<&str>) -> Result<(), CliError> {
    let filter = match level {
        Some(directives) => {
            EnvFilter::try_new(directives).map_err(|error| CliError::Logging(error.to_string()))?
        }
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|error| CliError::Logging(error.to_string()))
}
