//! Search pipeline: paced concurrent fan-out, per-engine bounding, ordered rendering.
//!
//! Every engine in the supplied list is queried concurrently through one
//! shared [`crate::http::Session`]. Each engine's results are capped and
//! failure-isolated by [`bounded_search`], buffered, and rendered strictly in
//! the order the engines were supplied, whatever order the responses
//! arrived in.

pub mod bounded;
pub mod render;
pub mod run;

pub use bounded::bounded_search;
pub use render::render_engine_results;
pub use run::{collect_results, run_pipeline};
