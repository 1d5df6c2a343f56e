//! The driver loop: one search, or one search per substitution step.
//!
//! ```text
//!            query lacks placeholder
//!   entry ───────────────────────────▶ SingleShot ──▶ Done
//!     │
//!     │ query contains placeholder
//!     ▼
//!  Iterating ──(processor.is_done())──▶ Done
//!     ▲    │
//!     └────┘ process(raw) → run pipeline
//! ```
//!
//! Cancellation is checked before every pipeline run and raced against the
//! run itself. A cancelled run drops its session, releasing connections,
//! and the loop returns [`DashError::Interrupted`]; blocks already written
//! for earlier iterations stay written.

use std::io::Write;
use std::sync::Arc;

use dash_search::{SearchConfig, SearchEngineTrait, build_engines, run_pipeline};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::config::DriverConfig;
use crate::error::{DashError, Result};
use crate::substitution::{StrategyRegistry, SubstitutionProcessor};

/// Where the driver loop currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    /// Run the pipeline once with the raw query.
    SingleShot,
    /// Run the pipeline once per substitution step.
    Iterating,
    /// Nothing left to do.
    Done,
}

/// What a completed run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Each query the pipeline ran, in order.
    pub queries: Vec<String>,
    /// State the loop stopped in.
    pub final_state: DriverState,
}

impl RunSummary {
    /// Number of completed pipeline runs.
    pub fn iterations(&self) -> usize {
        self.queries.len()
    }
}

/// Feeds a raw query through a substitution processor into the pipeline.
pub struct Driver {
    processor: Box<dyn SubstitutionProcessor>,
    engines: Vec<Arc<dyn SearchEngineTrait>>,
    search: SearchConfig,
}

impl Driver {
    /// Driver over an explicit processor and engine list.
    pub fn new(
        processor: Box<dyn SubstitutionProcessor>,
        engines: Vec<Arc<dyn SearchEngineTrait>>,
        search: SearchConfig,
    ) -> Self {
        Self {
            processor,
            engines,
            search,
        }
    }

    /// Validate `config`, build its processor from `registry` and
    /// instantiate the built-in engines it names.
    ///
    /// # Errors
    ///
    /// Returns [`DashError::UnknownStrategy`] for an unregistered strategy,
    /// or a config error for invalid settings.
    pub fn from_config(config: &DriverConfig, registry: &StrategyRegistry) -> Result<Self> {
        config.validate()?;
        let processor = registry.create(&config.strategy)?;
        let engines = build_engines(&config.engines);
        Ok(Self::new(processor, engines, config.search.clone()))
    }

    /// The state the loop starts in for `raw_query`.
    pub fn entry_state(&self, raw_query: &str) -> DriverState {
        match self.processor.placeholder() {
            Some(placeholder) if raw_query.contains(placeholder) => DriverState::Iterating,
            _ => DriverState::SingleShot,
        }
    }

    /// Run the loop to completion, writing result blocks to `out`.
    ///
    /// Consumes the driver: the processor is spent once the loop ends.
    ///
    /// # Errors
    ///
    /// Returns [`DashError::Interrupted`] if `cancel` fires, or the first
    /// pipeline or output error. Individual engine failures are not errors.
    pub async fn run<W: Write + ?Sized>(
        mut self,
        raw_query: &str,
        cancel: &CancellationToken,
        out: &mut W,
    ) -> Result<RunSummary> {
        let mut state = self.entry_state(raw_query);
        let mut summary = RunSummary {
            queries: Vec::new(),
            final_state: state,
        };
        debug!(?state, strategy = self.processor.name(), "driver starting");

        loop {
            state = match state {
                DriverState::SingleShot => {
                    self.search_once(raw_query, cancel, out).await?;
                    summary.queries.push(raw_query.to_owned());
                    DriverState::Done
                }
                DriverState::Iterating if self.processor.is_done() => DriverState::Done,
                DriverState::Iterating => {
                    let symbol = self.processor.current_symbol().to_owned();
                    let query = self.processor.process(raw_query)?;
                    debug!(%symbol, "substituted query");
                    self.search_once(&query, cancel, out).await?;
                    summary.queries.push(query);
                    DriverState::Iterating
                }
                DriverState::Done => break,
            };
        }
        summary.final_state = state;

        debug!(iterations = summary.iterations(), "driver finished");
        Ok(summary)
    }

    /// One pipeline run, abandoned as soon as `cancel` fires.
    async fn search_once<W: Write + ?Sized>(
        &self,
        query: &str,
        cancel: &CancellationToken,
        out: &mut W,
    ) -> Result<()> {
        if cancel.is_cancelled() {
            return Err(DashError::Interrupted);
        }

        writeln!(out, "Searching for: {query}")?;

        tokio::select! {
            biased;
            () = cancel.cancelled() => {
                info!(query, "search interrupted");
                Err(DashError::Interrupted)
            }
            outcome = run_pipeline(query, &self.engines, &self.search, out) => {
                outcome?;
                Ok(())
            }
        }
    }
}
