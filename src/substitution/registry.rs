//! Name → factory lookup for substitution strategies.

use std::collections::BTreeMap;

use super::{LetterCycler, PassThrough, SubstitutionProcessor};
use crate::error::{DashError, Result};

/// Strategy used when none is requested.
pub const DEFAULT_STRATEGY: &str = "letters";

/// Builds a fresh processor for one top-level run.
pub type ProcessorFactory = fn() -> Box<dyn SubstitutionProcessor>;

/// Registered substitution strategies, keyed by name.
#[derive(Debug, Clone)]
pub struct StrategyRegistry {
    factories: BTreeMap<&'static str, ProcessorFactory>,
}

impl Default for StrategyRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

impl StrategyRegistry {
    /// A registry with nothing registered.
    pub fn empty() -> Self {
        Self {
            factories: BTreeMap::new(),
        }
    }

    /// A registry holding `letters` and `passthrough`, plus their older
    /// command-line names `dashsub` and `search`.
    pub fn with_builtins() -> Self {
        let mut registry = Self::empty();
        for name in ["letters", "dashsub"] {
            registry.register(name, || Box::new(LetterCycler::new()));
        }
        for name in ["passthrough", "search"] {
            registry.register(name, || Box::new(PassThrough::new()));
        }
        registry
    }

    /// Register `factory` under `name`, returning any factory it replaced.
    pub fn register(
        &mut self,
        name: &'static str,
        factory: ProcessorFactory,
    ) -> Option<ProcessorFactory> {
        self.factories.insert(name, factory)
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> Vec<&'static str> {
        self.factories.keys().copied().collect()
    }

    /// Build a fresh processor for `name`.
    ///
    /// # Errors
    ///
    /// Returns [`DashError::UnknownStrategy`] if `name` is not registered.
    pub fn create(&self, name: &str) -> Result<Box<dyn SubstitutionProcessor>> {
        match self.factories.get(name) {
            Some(factory) => Ok(factory()),
            None => Err(DashError::UnknownStrategy {
                name: name.to_owned(),
                known: self.names().join(", "),
            }),
        }
    }
}
