//! Error taxonomy for the view-composition core.
//!
//! Structured errors via `thiserror`, composing through `?` and `From`.
//! Two classes matter here:
//!
//! - **Defect-class**: an unroutable path. The route table is exhaustive for
//!   the application's routing surface, so a miss indicates a programming
//!   error, not a recoverable runtime condition. It is still a typed error
//!   (never a panic) so the shell can fail loudly.
//! - **Recoverable**: a thread that could not be fetched. The view renders a
//!   terminal not-found state; there is no automatic retry.
//!
//! Layout derivation itself is total and has no error path.

use thiserror::Error;

/// Top-level application error for the shell.
///
/// Domain errors convert via `From`, enabling `?` propagation from the
/// library into `main`.
#[derive(Debug, Error)]
pub enum AppError {
    /// Route resolution failed (defect-class, see [`crate::routing::RouteError`]).
    #[error("Routing error: {0}")]
    Route(#[from] crate::routing::RouteError),

    /// Thread fetch failed (recoverable; rendered as a not-found state).
    #[error("Thread fetch error: {0}")]
    Fetch(#[from] crate::data::FetchError),

    /// Configuration file could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Tracing subscriber initialization failed.
    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LoggingError),

    /// I/O failure in the shell layer.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
