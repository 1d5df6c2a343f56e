//! Network-free engines for exercising the pipeline.
//!
//! [`FakeEngine`] returns canned results (optionally after a delay) and
//! records every query it receives. [`FailingEngine`] always errors. Both
//! report a zero pacing hint so tests run without sleeping.
//!
//! ```
//! use dash_search::testing::FakeEngine;
//! use dash_search::SearchEngineTrait;
//!
//! let engine = FakeEngine::new("DuckDuckGo", 25);
//! assert_eq!(engine.name(), "DuckDuckGo");
//! assert!(engine.queries().is_empty());
//! ```

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use crate::engine::SearchEngineTrait;
use crate::error::SearchError;
use crate::http::Session;
use crate::types::SearchResult;

type SearchHook = Box<dyn Fn(usize) + Send + Sync>;

/// Engine returning `result_count` synthetic results for any query.
pub struct FakeEngine {
    name: String,
    result_count: usize,
    delay: Duration,
    queries: Mutex<Vec<String>>,
    on_search: Option<SearchHook>,
}

impl FakeEngine {
    /// Fake engine labelled `name` that returns `result_count` results.
    pub fn new(name: impl Into<String>, result_count: usize) -> Self {
        Self {
            name: name.into(),
            result_count,
            delay: Duration::ZERO,
            queries: Mutex::new(Vec::new()),
            on_search: None,
        }
    }

    /// Sleep for `delay` before answering.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Run `hook` with the 1-based call number each time a search completes.
    pub fn on_search(mut self, hook: impl Fn(usize) + Send + Sync + 'static) -> Self {
        self.on_search = Some(Box::new(hook));
        self
    }

    /// Every query received so far, oldest first.
    pub fn queries(&self) -> Vec<String> {
        self.queries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// The most recent query, if any.
    pub fn last_query(&self) -> Option<String> {
        self.queries().pop()
    }

    /// The synthetic results this engine produces for `query`.
    pub fn results_for(&self, query: &str) -> Vec<SearchResult> {
        (1..=self.result_count)
            .map(|i| SearchResult {
                title: format!("Result {i} for {query}"),
                url: format!("https://example.com/{}/{i}", self.name.to_lowercase()),
                snippet: format!("Snippet {i}"),
                engine: self.name.clone(),
            })
            .collect()
    }
}

#[async_trait]
impl SearchEngineTrait for FakeEngine {
    async fn search(
        &self,
        query: &str,
        _session: &Session,
    ) -> Result<Vec<SearchResult>, SearchError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        let calls = {
            let mut queries = self
                .queries
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            queries.push(query.to_owned());
            queries.len()
        };
        if let Some(hook) = &self.on_search {
            hook(calls);
        }
        Ok(self.results_for(query))
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn rate_limit(&self) -> Duration {
        Duration::ZERO
    }
}

/// Engine whose every search fails with a transport error.
pub struct FailingEngine {
    name: String,
}

impl Default for FailingEngine {
    fn default() -> Self {
        Self::new("FailEngine")
    }
}

impl FailingEngine {
    /// Failing engine labelled `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[async_trait]
impl SearchEngineTrait for FailingEngine {
    async fn search(
        &self,
        _query: &str,
        _session: &Session,
    ) -> Result<Vec<SearchResult>, SearchError> {
        Err(SearchError::Http("network down".into()))
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn rate_limit(&self) -> Duration {
        Duration::ZERO
    }
}
