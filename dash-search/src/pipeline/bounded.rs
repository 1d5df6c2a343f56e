//! Result capping and failure isolation for a single engine.

use crate::engine::SearchEngineTrait;
use crate::http::Session;
use crate::types::SearchResult;

/// Query one engine, keeping at most `cap` results in engine order.
///
/// Never fails: an engine error is logged at warn level and turned into an
/// empty result list so that one engine can never take down the others.
pub async fn bounded_search(
    query: &str,
    engine: &dyn SearchEngineTrait,
    session: &Session,
    cap: usize,
) -> Vec<SearchResult> {
    match engine.search(query, session).await {
        Ok(mut results) => {
            let found = results.len();
            results.truncate(cap);
            tracing::debug!(
                engine = engine.name(),
                found,
                kept = results.len(),
                "engine returned results"
            );
            results
        }
        Err(err) => {
            tracing::warn!(engine = engine.name(), error = %err, "engine query failed");
            Vec::new()
        }
    }
}
