//! Error types for the dash-search crate.
//!
//! All errors carry stable string messages suitable for display to users.
//! None of them escape [`crate::pipeline::bounded_search`]; they exist so
//! that engines can report *why* they came back empty.

/// Errors that can occur while querying a search engine.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// An HTTP request to a search engine could not be completed.
    #[error("HTTP error: {0}")]
    Http(String),

    /// The engine did not answer within the configured timeout.
    #[error("search timed out: {0}")]
    Timeout(String),

    /// The engine answered with a non-success status code.
    #[error("{engine} returned status {status}")]
    Status {
        /// Display name of the engine.
        engine: String,
        /// HTTP status code received.
        status: u16,
    },

    /// Failed to parse search engine response HTML.
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid search configuration.
    #[error("config error: {0}")]
    Config(String),

    /// Writing rendered results failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SearchError {
    /// Classify a [`reqwest::Error`] raised while talking to `engine`.
    pub fn from_transport(engine: &str, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(format!("{engine}: {err}"))
        } else if let Some(status) = err.status() {
            Self::Status {
                engine: engine.to_owned(),
                status: status.as_u16(),
            }
        } else {
            Self::Http(format!("{engine} request failed: {err}"))
        }
    }
}

/// Convenience type alias for dash-search results.
pub type Result<T> = std::result::Result<T, SearchError>;
