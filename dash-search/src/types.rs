//! Core types for search results and engine identification.

use std::fmt;
use std::str::FromStr;

use crate::error::SearchError;

/// A single search result scraped from a search engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// The title of the search result page.
    pub title: String,
    /// The URL of the search result. Empty when the engine omitted it.
    pub url: String,
    /// A text snippet summarising the page content. May be empty.
    pub snippet: String,
    /// Display name of the engine that returned this result.
    pub engine: String,
}

/// Built-in search engines that can be placed in the active engine list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EngineKind {
    /// DuckDuckGo HTML endpoint, queried with a form POST.
    DuckDuckGo,
    /// StartPage, queried with a GET.
    StartPage,
}

impl EngineKind {
    /// Returns the human-readable name of this engine.
    pub fn name(&self) -> &'static str {
        match self {
            Self::DuckDuckGo => "DuckDuckGo",
            Self::StartPage => "StartPage",
        }
    }

    /// Returns every built-in engine in default query order.
    pub fn all() -> &'static [EngineKind] {
        &[Self::DuckDuckGo, Self::StartPage]
    }
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EngineKind {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "duckduckgo" | "ddg" => Ok(Self::DuckDuckGo),
            "startpage" | "sp" => Ok(Self::StartPage),
            other => Err(SearchError::Config(format!(
                "unknown engine `{other}` (use duckduckgo|startpage)"
            ))),
        }
    }
}

/// The bounded results of one engine for one pipeline run.
#[derive(Debug, Clone)]
pub struct EngineResults {
    /// Display name of the engine.
    pub engine: String,
    /// At most `max_results_per_engine` results, in engine order.
    pub results: Vec<SearchResult>,
}
