//! Driver configuration.
//!
//! [`DriverConfig`] bundles the pipeline's [`SearchConfig`] with the choice
//! of substitution strategy and the ordered list of engines to query. The
//! binary builds one from command-line arguments; there is no config file.

use dash_search::{EngineKind, SearchConfig};

use crate::error::{DashError, Result};
use crate::substitution::DEFAULT_STRATEGY;

/// Everything needed to construct a [`crate::Driver`].
#[derive(Debug, Clone)]
pub struct DriverConfig {
    /// Result caps, timeouts and connection limits for each pipeline run.
    pub search: SearchConfig,
    /// Registry name of the substitution strategy.
    pub strategy: String,
    /// Engines to query, in output order.
    pub engines: Vec<EngineKind>,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            search: SearchConfig::default(),
            strategy: DEFAULT_STRATEGY.to_owned(),
            engines: EngineKind::all().to_vec(),
        }
    }
}

impl DriverConfig {
    /// Validate the search settings and the engine list.
    ///
    /// The strategy name is checked when the registry builds the processor.
    pub fn validate(&self) -> Result<()> {
        self.search.validate()?;
        if self.engines.is_empty() {
            return Err(DashError::Config(
                "at least one engine must be enabled".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_query_both_engines_with_letters() {
        let config = DriverConfig::default();
        assert_eq!(config.strategy, "letters");
        assert_eq!(
            config.engines,
            vec![EngineKind::DuckDuckGo, EngineKind::StartPage]
        );
        assert_eq!(config.search.max_results_per_engine, 20);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_engine_list_rejected() {
        let config = DriverConfig {
            engines: vec![],
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("engine"));
    }

    #[test]
    fn invalid_search_settings_rejected() {
        let config = DriverConfig {
            search: SearchConfig {
                max_results_per_engine: 0,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(DashError::Search(_))));
    }
}
