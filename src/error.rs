//! Error types for the searchdash driver.

use dash_search::SearchError;

/// Top-level error type for query substitution and the driver loop.
#[derive(Debug, thiserror::Error)]
pub enum DashError {
    /// A substitution processor was asked for another query after it had
    /// finished. The driver always checks `is_done()` first, so reaching
    /// this is a caller bug.
    #[error("substitution exhausted: {0}")]
    Exhausted(String),

    /// No substitution strategy is registered under the requested name.
    #[error("unknown substitution strategy `{name}` (known: {known})")]
    UnknownStrategy {
        /// The name that was looked up.
        name: String,
        /// Comma-separated registered names.
        known: String,
    },

    /// Invalid driver configuration.
    #[error("config error: {0}")]
    Config(String),

    /// The run was cancelled by the user.
    #[error("search interrupted by user")]
    Interrupted,

    /// The search pipeline could not run.
    #[error(transparent)]
    Search(#[from] SearchError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type.
pub type Result<T> = std::result::Result<T, DashError>;
