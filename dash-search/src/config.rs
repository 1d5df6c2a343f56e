//! Search configuration with sensible defaults.
//!
//! [`SearchConfig`] controls result caps, timeouts, connection limits and
//! request headers for a pipeline run.

use crate::error::SearchError;

/// Default cap on results rendered per engine.
pub const DEFAULT_MAX_RESULTS_PER_ENGINE: usize = 20;

/// Configuration for a pipeline run.
///
/// Use [`Default::default()`] for sensible defaults, or construct with
/// field overrides for custom behaviour.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Maximum number of results kept per engine.
    pub max_results_per_engine: usize,
    /// Per-request HTTP timeout in seconds.
    pub timeout_seconds: u64,
    /// Maximum simultaneous connections across all engines.
    pub max_connections: usize,
    /// Maximum simultaneous connections to any one host.
    pub max_connections_per_host: usize,
    /// Custom User-Agent string. If `None`, rotates through a built-in list
    /// of realistic browser User-Agents.
    pub user_agent: Option<String>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_results_per_engine: DEFAULT_MAX_RESULTS_PER_ENGINE,
            timeout_seconds: 10,
            max_connections: 10,
            max_connections_per_host: 2,
            user_agent: None,
        }
    }
}

impl SearchConfig {
    /// Validates this configuration, returning an error if any field is invalid.
    ///
    /// Checks:
    /// - `max_results_per_engine` must be greater than 0
    /// - `timeout_seconds` must be greater than 0
    /// - `max_connections` and `max_connections_per_host` must be greater than 0
    /// - `max_connections_per_host` must be <= `max_connections`
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_results_per_engine == 0 {
            return Err(SearchError::Config(
                "max_results_per_engine must be greater than 0".into(),
            ));
        }
        if self.timeout_seconds == 0 {
            return Err(SearchError::Config(
                "timeout_seconds must be greater than 0".into(),
            ));
        }
        if self.max_connections == 0 || self.max_connections_per_host == 0 {
            return Err(SearchError::Config(
                "connection limits must be greater than 0".into(),
            ));
        }
        if self.max_connections_per_host > self.max_connections {
            return Err(SearchError::Config(
                "max_connections_per_host must be <= max_connections".into(),
            ));
        }
        Ok(())
    }
}
