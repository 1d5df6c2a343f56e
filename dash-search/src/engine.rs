//! Trait definition for pluggable search engine backends.
//!
//! Each search engine (DuckDuckGo, StartPage) implements
//! [`SearchEngineTrait`] to provide a uniform interface for querying and
//! parsing results. The pipeline takes an explicit, ordered list of
//! `Arc<dyn SearchEngineTrait>`, so tests can slot in fakes.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::engines::{DuckDuckGoEngine, StartPageEngine};
use crate::error::SearchError;
use crate::http::Session;
use crate::types::{EngineKind, SearchResult};

/// Pacing hint used by the built-in engines.
pub const DEFAULT_RATE_LIMIT: Duration = Duration::from_secs(1);

/// A pluggable search engine backend.
///
/// Implementors issue one request per call and extract structured
/// [`SearchResult`] values. Each engine handles its own:
///
/// - Request construction (method, endpoint, query encoding)
/// - HTML parsing via CSS selectors
/// - Mapping transport failures and bad statuses onto [`SearchError`]
///
/// Errors returned here never reach the pipeline caller:
/// [`crate::pipeline::bounded_search`] logs them and substitutes an empty
/// result list.
#[async_trait]
pub trait SearchEngineTrait: Send + Sync {
    /// Perform a web search and return parsed results.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError`] if the HTTP request fails, times out, returns
    /// a non-success status, or the response cannot be parsed.
    async fn search(&self, query: &str, session: &Session)
        -> Result<Vec<SearchResult>, SearchError>;

    /// Display name used to label this engine's output.
    fn name(&self) -> &str;

    /// Pacing hint. The pipeline waits `rate_limit / engine_count` before
    /// issuing each engine's request.
    fn rate_limit(&self) -> Duration {
        DEFAULT_RATE_LIMIT
    }
}

/// Instantiate a built-in engine.
pub fn build_engine(kind: EngineKind) -> Arc<dyn SearchEngineTrait> {
    match kind {
        EngineKind::DuckDuckGo => Arc::new(DuckDuckGoEngine::new()),
        EngineKind::StartPage => Arc::new(StartPageEngine::new()),
    }
}

/// Instantiate built-in engines, preserving the order of `kinds`.
pub fn build_engines(kinds: &[EngineKind]) -> Vec<Arc<dyn SearchEngineTrait>> {
    kinds.iter().copied().map(build_engine).collect()
}
