//! Search engine implementations.
//!
//! Each module provides a struct implementing [`crate::engine::SearchEngineTrait`] that
//! scrapes a specific search engine's HTML results page.

pub mod duckduckgo;
pub mod startpage;

pub use duckduckgo::DuckDuckGoEngine;
pub use startpage::StartPageEngine;

use scraper::ElementRef;

/// Concatenate an element's text and collapse runs of whitespace.
pub(crate) fn element_text(el: ElementRef<'_>) -> String {
    el.text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}
