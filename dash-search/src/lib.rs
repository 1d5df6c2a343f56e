//! # dash-search
//!
//! Keyword search against DuckDuckGo and StartPage by scraping their public
//! HTML endpoints. No API keys are needed.
//!
//! ## Design
//!
//! - Each engine implements [`SearchEngineTrait`]; the active set is an
//!   explicit, ordered list passed into the pipeline
//! - Engines are queried concurrently over one [`http::Session`] per run,
//!   bounded to a fixed number of connections overall and per host
//! - Each engine's results are capped and failure-isolated: an engine that
//!   errors or times out simply contributes no results
//! - Output is rendered per engine, in list order, regardless of which
//!   engine answered first
//!
//! ## Security
//!
//! - No API keys or secrets to leak
//! - Search queries are logged only at trace level

pub mod config;
pub mod engine;
pub mod engines;
pub mod error;
pub mod http;
pub mod pipeline;
#[cfg(any(test, feature = "testing"))]
pub mod testing;
pub mod types;

pub use config::{SearchConfig, DEFAULT_MAX_RESULTS_PER_ENGINE};
pub use engine::{build_engine, build_engines, SearchEngineTrait};
pub use error::{Result, SearchError};
pub use pipeline::{bounded_search, collect_results, run_pipeline};
pub use types::{EngineKind, EngineResults, SearchResult};
