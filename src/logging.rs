//! tracing setup. Events go to a daily rolling file because the terminal
//! belongs to the TUI.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{InitError, RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

/// Errors that can occur while installing the subscriber.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    /// The log directory or file could not be created.
    #[error("could not open log file: {0}")]
    Appender(#[from] InitError),

    /// A global subscriber was already installed.
    #[error("could not install subscriber: {0}")]
    Install(String),
}

/// Creates the `depolog.YYYY-MM-DD.log` appender in `dir`.
pub fn file_appender(dir: &Path) -> Result<RollingFileAppender, InitError> {
    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("depolog")
        .filename_suffix("log")
        .build(dir)
}

/// Builds the filter: `RUST_LOG` wins, otherwise `level`.
pub fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

/// Installs the global subscriber writing to `dir`.
///
/// Keep the returned guard alive for the life of the program; dropping it
/// flushes and stops the background writer.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn init(dir: &Path, level: &str) -> Result<WorkerGuard, LoggingError> {
    let (writer, guard) = tracing_appender::non_blocking(file_appender(dir)?);
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(level))
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| LoggingError::Install(e.to_string()))?;
    Ok(guard)
}
