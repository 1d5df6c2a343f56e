//! Plain-text rendering of one engine's results.

use std::io::{self, Write};

use crate::types::SearchResult;

const RULE_WIDTH: usize = 80;

/// Write the block for one engine.
///
/// An empty list produces a single `[<engine>] No results found.` line.
/// Otherwise a count header and rule are followed by one numbered entry
/// per result; the snippet line is omitted when the snippet is empty.
pub fn render_engine_results<W: Write + ?Sized>(
    out: &mut W,
    engine: &str,
    results: &[SearchResult],
) -> io::Result<()> {
    if results.is_empty() {
        writeln!(out, "[{engine}] No results found.")?;
        return Ok(());
    }

    let noun = if results.len() == 1 { "result" } else { "results" };
    writeln!(out, "\n[{engine}] Found {} {noun}:", results.len())?;
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;

    for (i, result) in results.iter().enumerate() {
        writeln!(out, "\n{}. {}", i + 1, result.title)?;
        writeln!(out, "   URL: {}", result.url)?;
        if !result.snippet.is_empty() {
            writeln!(out, "   {}", result.snippet)?;
        }
    }
    writeln!(out)?;
    Ok(())
}
