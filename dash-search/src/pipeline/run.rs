//! One pipeline run: paced fan-out over an ordered engine list.

use std::io::Write;
use std::sync::Arc;

use crate::config::SearchConfig;
use crate::engine::SearchEngineTrait;
use crate::error::SearchError;
use crate::http::Session;
use crate::types::EngineResults;

use super::bounded::bounded_search;
use super::render::render_engine_results;

/// Query every engine for `query` and buffer their bounded results.
///
/// # Pipeline
///
/// 1. Build a [`Session`] owned by this run
/// 2. Before issuing each engine, wait `rate_limit / engines.len()`
/// 3. Run all bounded searches concurrently with [`futures::future::join_all`]
/// 4. Return the buffers in the order of `engines`, not completion order
///
/// The session is dropped on return, or when the returned future is
/// dropped mid-flight, which releases all of its connections.
///
/// # Errors
///
/// Returns [`SearchError::Config`] for an invalid `config` and
/// [`SearchError::Http`] if the HTTP client cannot be built. Engine
/// failures are not errors; they yield an empty buffer.
pub async fn collect_results(
    query: &str,
    engines: &[Arc<dyn SearchEngineTrait>],
    config: &SearchConfig,
) -> Result<Vec<EngineResults>, SearchError> {
    config.validate()?;
    let session = Session::new(config)?;
    let session = &session;
    let cap = config.max_results_per_engine;
    let divisor = u32::try_from(engines.len()).unwrap_or(u32::MAX).max(1);

    let mut pending = Vec::with_capacity(engines.len());
    for engine in engines {
        let pause = engine.rate_limit() / divisor;
        if !pause.is_zero() {
            tokio::time::sleep(pause).await;
        }
        pending.push(async move {
            EngineResults {
                engine: engine.name().to_owned(),
                results: bounded_search(query, engine.as_ref(), session, cap).await,
            }
        });
    }

    Ok(futures::future::join_all(pending).await)
}

/// Run all engines for `query` and render each engine's block to `out`.
///
/// Blocks are written in the order of `engines`. Returns the buffers that
/// were rendered.
///
/// # Errors
///
/// Same as [`collect_results`], plus [`SearchError::Io`] if writing fails.
pub async fn run_pipeline<W: Write + ?Sized>(
    query: &str,
    engines: &[Arc<dyn SearchEngineTrait>],
    config: &SearchConfig,
    out: &mut W,
) -> Result<Vec<EngineResults>, SearchError> {
    let collected = collect_results(query, engines, config).await?;
    for block in &collected {
        render_engine_results(out, &block.engine, &block.results)?;
    }
    out.flush()?;
    Ok(collected)
}
