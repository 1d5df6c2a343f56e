//! DuckDuckGo search engine.
//!
//! Uses the HTML-only version at `https://html.duckduckgo.com/html/`
//! which requires no JavaScript and is tolerant of automated requests.

use async_trait::async_trait;
use scraper::{Html, Selector};
use url::Url;

use super::element_text;
use crate::engine::SearchEngineTrait;
use crate::error::SearchError;
use crate::http::Session;
use crate::types::{EngineKind, SearchResult};

const ENDPOINT: &str = "https://html.duckduckgo.com/html/";

/// DuckDuckGo HTML search engine scraper.
///
/// Sends the query as a form POST to the HTML-only endpoint.
#[derive(Debug, Clone)]
pub struct DuckDuckGoEngine {
    endpoint: String,
}

impl Default for DuckDuckGoEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl DuckDuckGoEngine {
    /// Engine pointed at the public DuckDuckGo HTML endpoint.
    pub fn new() -> Self {
        Self::with_endpoint(ENDPOINT)
    }

    /// Engine pointed at a custom endpoint (mock servers, mirrors).
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    /// Extract the actual URL from DuckDuckGo's redirect wrapper.
    ///
    /// DDG wraps URLs like: `//duckduckgo.com/l/?uddg=https%3A%2F%2Fexample.com&rut=...`
    /// We parse out the `uddg` query parameter and URL-decode it.
    fn extract_url(href: &str) -> Option<String> {
        let full_href = if href.starts_with("//") {
            format!("https:{href}")
        } else {
            href.to_string()
        };

        let parsed = Url::parse(&full_href).ok()?;

        if parsed.host_str() == Some("duckduckgo.com") && parsed.path().starts_with("/l/") {
            parsed
                .query_pairs()
                .find(|(key, _)| key == "uddg")
                .map(|(_, value)| value.into_owned())
        } else {
            Some(full_href)
        }
    }
}

#[async_trait]
impl SearchEngineTrait for DuckDuckGoEngine {
    async fn search(
        &self,
        query: &str,
        session: &Session,
    ) -> Result<Vec<SearchResult>, SearchError> {
        tracing::trace!(query, "DuckDuckGo search");
        let name = EngineKind::DuckDuckGo.name();

        let _permit = session.acquire(&self.endpoint).await?;

        let params = [("q", query), ("b", ""), ("kl", "us-en")];
        let response = session
            .client()
            .post(&self.endpoint)
            .form(&params)
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

        tracing::trace!(bytes = html.len(), "DuckDuckGo response received");

        parse_duckduckgo_html(&html)
    }

    fn name(&self) -> &str {
        EngineKind::DuckDuckGo.name()
    }
}

/// Parse DuckDuckGo HTML response into search results.
///
/// Results without a title are skipped. A missing snippet or link becomes
/// an empty string.
pub fn parse_duckduckgo_html(html: &str) -> Result<Vec<SearchResult>, SearchError> {
    let document = Html::parse_document(html);

    let result_sel = Selector::parse(".result:not(.result--ad)")
        .map_err(|e| SearchError::Parse(format!("invalid result selector: {e:?}")))?;
    let title_sel = Selector::parse(".result__a")
        .map_err(|e| SearchError::Parse(format!("invalid title selector: {e:?}")))?;
    let snippet_sel = Selector::parse(".result__snippet")
        .map_err(|e| SearchError::Parse(format!("invalid snippet selector: {e:?}")))?;

    let mut results = Vec::new();

    for element in document.select(&result_sel) {
        let Some(title_el) = element.select(&title_sel).next() else {
            continue;
        };

        let title = element_text(title_el);
        if title.is_empty() {
            continue;
        }

        let url = title_el
            .value()
            .attr("href")
            .map(|href| DuckDuckGoEngine::extract_url(href).unwrap_or_else(|| href.to_owned()))
            .unwrap_or_default();

        let snippet = element
            .select(&snippet_sel)
            .next()
            .map(element_text)
            .unwrap_or_default();

        results.push(SearchResult {
            title,
            url,
            snippet,
            engine: EngineKind::DuckDuckGo.name().to_string(),
        });
    }

    tracing::debug!(count = results.len(), "DuckDuckGo results parsed");
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MOCK_DDG_HTML: &str = r#"<!DOCTYPE html>
<html>
<body>
<div class="result results_links results_links_deep web-result">
    <a class="result__a" href="//duckduckgo.com/l/?uddg=https%3A%2F%2Fwww.rust-lang.org%2F&amp;rut=abc123">
        Rust Programming Language
    </a>
    <a class="result__snippet">
        A language empowering everyone to build reliable and efficient software.
    </a>
</div>
<div class="result result--ad">
    <a class="result__a" href="https://ads.example.com/">Buy Rust Now (Ad)</a>
</div>
<div class="result results_links results_links_deep web-result">
    <a class="result__a" href="https://doc.rust-lang.org/book/">
        The Rust Programming Language Book
    </a>
</div>
<div class="result results_links results_links_deep web-result">
    <a class="result__a">Rust without a link</a>
    <a class="result__snippet">No href on this one.</a>
</div>
<div class="result results_links results_links_deep web-result">
    <a class="result__snippet">A snippet with no title is dropped.</a>
</div>
</body>
</html>"#;

    #[test]
    fn extract_url_from_ddg_redirect() {
        let href = "//duckduckgo.com/l/?uddg=https%3A%2F%2Fexample.com%2Fpage&rut=abc";
        let result = DuckDuckGoEngine::extract_url(href);
        assert_eq!(result, Some("https://example.com/page".to_string()));
    }

    #[test]
    fn extract_url_direct_link() {
        let href = "https://example.com/direct";
        let result = DuckDuckGoEngine::extract_url(href);
        assert_eq!(result, Some("https://example.com/direct".to_string()));
    }

    #[test]
    fn extract_url_invalid() {
        assert!(DuckDuckGoEngine::extract_url("not-a-url").is_none());
    }

    #[test]
    fn parse_mock_html_returns_results() {
        let results = parse_duckduckgo_html(MOCK_DDG_HTML).expect("should parse");
        assert_eq!(results.len(), 3);

        assert_eq!(results[0].title, "Rust Programming Language");
        assert_eq!(results[0].url, "https://www.rust-lang.org/");
        assert_eq!(
            results[0].snippet,
            "A language empowering everyone to build reliable and efficient software."
        );
        assert_eq!(results[0].engine, "DuckDuckGo");

        assert_eq!(results[1].url, "https://doc.rust-lang.org/book/");
        assert_eq!(results[1].snippet, "");
    }

    #[test]
    fn missing_href_defaults_to_empty_url() {
        let results = parse_duckduckgo_html(MOCK_DDG_HTML).expect("should parse");
        assert_eq!(results[2].title, "Rust without a link");
        assert_eq!(results[2].url, "");
        assert_eq!(results[2].snippet, "No href on this one.");
    }

    #[test]
    fn ads_and_untitled_results_are_excluded() {
        let results = parse_duckduckgo_html(MOCK_DDG_HTML).expect("should parse");
        for r in &results {
            assert!(!r.title.contains("(Ad)"), "ad leaked: {}", r.title);
            assert!(!r.title.is_empty());
        }
    }

    #[test]
    fn unparseable_href_is_kept_verbatim() {
        let html = r#"<div class="result"><a class="result__a" href="/relative/path">Relative</a></div>"#;
        let results = parse_duckduckgo_html(html).expect("should parse");
        assert_eq!(results[0].url, "/relative/path");
    }

    #[test]
    fn parse_empty_html_returns_empty() {
        let results = parse_duckduckgo_html("<html><body></body></html>").expect("should parse");
        assert!(results.is_empty());
    }

    #[test]
    fn engine_name_is_duckduckgo() {
        assert_eq!(DuckDuckGoEngine::new().name(), "DuckDuckGo");
    }

    #[tokio::test]
    #[ignore] // Live test; run with `cargo test -- --ignored`
    async fn live_duckduckgo_search() {
        let session = Session::new(&crate::SearchConfig::default()).expect("session");
        let results = DuckDuckGoEngine::new()
            .search("rust programming", &session)
            .await
            .expect("live search should work");
        assert!(!results.is_empty());
        for r in &results {
            assert!(!r.title.is_empty());
        }
    }
}
