//! Tracing subscriber initialization.
//!
//! Logs go to a file so the interface (rendered elsewhere) stays clean;
//! monitor with `tail -f`. `RUST_LOG` controls verbosity, default `info`.

use std::path::Path;
use thiserror::Error;

/// Logging initialization failures.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The log directory could not be created.
    #[error("Failed to create log directory for {path}: {source}")]
    Directory {
        /// The configured log file path.
        path: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The log path has no usable file name component.
    #[error("Invalid log file path: {0}")]
    InvalidPath(String),

    /// A global subscriber is already installed.
    #[error("Tracing subscriber already initialized")]
    AlreadyInitialized,
}

/// Install a file-backed tracing subscriber.
///
/// Creates the parent directory when missing. Fails if the subscriber was
/// already set, or if the path has no file name.
pub fn init(log_path: &Path) -> Result<(), LoggingError> {
    use tracing_subscriber::EnvFilter;

    let file_name = log_path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| LoggingError::InvalidPath(log_path.display().to_string()))?;
    let directory = log_path.parent().unwrap_or_else(|| Path::new("."));

    std::fs::create_dir_all(directory).map_err(|source| LoggingError::Directory {
        path: log_path.display().to_string(),
        source,
    })?;

    let appender = tracing_appender::rolling::never(directory, file_name);
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(appender)
        .with_ansi(false)
        .try_init()
        .map_err(|_| LoggingError::AlreadyInitialized)
}
