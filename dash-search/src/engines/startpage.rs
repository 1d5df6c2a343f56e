//! StartPage search engine, a privacy-focused proxy for Google results.
//!
//! Uses a GET request to `https://www.startpage.com/do/search` which
//! returns server-rendered HTML.

use async_trait::async_trait;
use scraper::{Html, Selector};

use super::element_text;
use crate::engine::SearchEngineTrait;
use crate::error::SearchError;
use crate::http::Session;
use crate::types::{EngineKind, SearchResult};

const ENDPOINT: &str = "https://www.startpage.com/do/search";

/// StartPage HTML search scraper.
#[derive(Debug, Clone)]
pub struct StartPageEngine {
    endpoint: String,
}

impl Default for StartPageEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl StartPageEngine {
    /// Engine pointed at the public StartPage endpoint.
    pub fn new() -> Self {
        Self::with_endpoint(ENDPOINT)
    }

    /// Engine pointed at a custom endpoint (mock servers, mirrors).
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl SearchEngineTrait for StartPageEngine {
    async fn search(
        &self,
        query: &str,
        session: &Session,
    ) -> Result<Vec<SearchResult>, SearchError> {
        tracing::trace!(query, "StartPage search");
        let name = EngineKind::StartPage.name();

        let _permit = session.acquire(&self.endpoint).await?;

        let params = [("query", query), ("cat", "web"), ("language", "english")];
        let response = session
            .client()
            .get(&self.endpoint)
            .query(&params)
            .header("Accept", "text/html,application/xhtml+xml")
            .header("Accept-Language", "en-US,en;q=0.9")
            .send()
            .await
            .map_err(|e| SearchError::from_transport(name, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Status {
                engine: name.to_owned(),
                status: status.as_u16(),
            });
        }

        let html = response
            .text()
            .await
            .map_err(|e| SearchError::from_transport(name, e))?;

        tracing::trace!(bytes = html.len(), "StartPage response received");

        parse_startpage_html(&html)
    }

    fn name(&self) -> &str {
        EngineKind::StartPage.name()
    }
}

/// Parse StartPage HTML response into search results.
///
/// The link comes from `.w-gl__result-url` when present, otherwise from the
/// title element itself or a link nested inside it.
pub fn parse_startpage_html(html: &str) -> Result<Vec<SearchResult>, SearchError> {
    let document = Html::parse_document(html);

    let result_sel = Selector::parse(".w-gl__result")
        .map_err(|e| SearchError::Parse(format!("invalid result selector: {e:?}")))?;
    let title_sel = Selector::parse(".w-gl__result-title")
        .map_err(|e| SearchError::Parse(format!("invalid title selector: {e:?}")))?;
    let url_sel = Selector::parse(".w-gl__result-url")
        .map_err(|e| SearchError::Parse(format!("invalid url selector: {e:?}")))?;
    let desc_sel = Selector::parse(".w-gl__description")
        .map_err(|e| SearchError::Parse(format!("invalid description selector: {e:?}")))?;
    let link_sel = Selector::parse("a[href]")
        .map_err(|e| SearchError::Parse(format!("invalid link selector: {e:?}")))?;

    let mut results = Vec::new();

    for element in document.select(&result_sel) {
        let Some(title_el) = element.select(&title_sel).next() else {
            continue;
        };

        let title = element_text(title_el);
        if title.is_empty() {
            continue;
        }

        let url = element
            .select(&url_sel)
            .next()
            .and_then(|a| a.value().attr("href"))
            .or_else(|| title_el.value().attr("href"))
            .or_else(|| {
                title_el
                    .select(&link_sel)
                    .next()
                    .and_then(|a| a.value().attr("href"))
            })
            .unwrap_or_default()
            .to_string();

        let snippet = element
            .select(&desc_sel)
            .next()
            .map(element_text)
            .unwrap_or_default();

        results.push(SearchResult {
            title,
            url,
            snippet,
            engine: EngineKind::StartPage.name().to_string(),
        });
    }

    tracing::debug!(count = results.len(), "StartPage results parsed");
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MOCK_STARTPAGE_HTML: &str = r#"<!DOCTYPE html>
<html>
<body>
<div class="w-gl__result">
    <a class="w-gl__result-title" href="https://www.rust-lang.org/?ref=title">
        Rust Programming Language
    </a>
    <a class="w-gl__result-url" href="https://www.rust-lang.org/">www.rust-lang.org</a>
    <p class="w-gl__description">
        A language empowering everyone to build reliable and efficient software.
    </p>
</div>
<div class="w-gl__result">
    <div class="w-gl__result-title">
        <a href="https://doc.rust-lang.org/book/">
            The Rust Programming Language Book
        </a>
    </div>
</div>
<div class="w-gl__result">
    <a class="w-gl__result-title" href="https://en.wikipedia.org/wiki/Rust_(programming_language)">
        Rust (programming language) - Wikipedia
    </a>
    <p class="w-gl__description">Rust is a general-purpose programming language.</p>
</div>
<div class="w-gl__result">
    <p class="w-gl__description">Untitled results are dropped.</p>
</div>
</body>
</html>"#;

    #[test]
    fn parse_mock_html_returns_results() {
        let results = parse_startpage_html(MOCK_STARTPAGE_HTML).expect("should parse");
        assert_eq!(results.len(), 3);

        assert_eq!(results[0].title, "Rust Programming Language");
        assert_eq!(results[0].engine, "StartPage");
        assert!(results[0].snippet.contains("reliable and efficient"));

        assert!(results[2].url.contains("wikipedia.org"));
    }

    #[test]
    fn url_element_takes_precedence_over_title_href() {
        let results = parse_startpage_html(MOCK_STARTPAGE_HTML).expect("should parse");
        assert_eq!(results[0].url, "https://www.rust-lang.org/");
    }

    #[test]
    fn nested_title_link_is_used_as_fallback() {
        let results = parse_startpage_html(MOCK_STARTPAGE_HTML).expect("should parse");
        assert_eq!(results[1].title, "The Rust Programming Language Book");
        assert_eq!(results[1].url, "https://doc.rust-lang.org/book/");
        assert_eq!(results[1].snippet, "");
    }

    #[test]
    fn missing_link_defaults_to_empty_url() {
        let html = r#"<div class="w-gl__result"><h3 class="w-gl__result-title">No link</h3></div>"#;
        let results = parse_startpage_html(html).expect("should parse");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].url, "");
    }

    #[test]
    fn parse_empty_html_returns_empty() {
        let results = parse_startpage_html("<html><body></body></html>").expect("should parse");
        assert!(results.is_empty());
    }

    #[test]
    fn engine_name_is_startpage() {
        assert_eq!(StartPageEngine::new().name(), "StartPage");
    }

    #[tokio::test]
    #[ignore] // Live test; run with `cargo test -- --ignored`
    async fn live_startpage_search() {
        let session = Session::new(&crate::SearchConfig::default()).expect("session");
        let results = StartPageEngine::new()
            .search("rust programming", &session)
            .await
            .expect("live search should work");
        assert!(!results.is_empty());
        for r in &results {
            assert!(!r.title.is_empty());
        }
    }
}
