//! searchdash: search DuckDuckGo and StartPage from the command line.
//!
//! A query without the substitution placeholder (`-` by default) is searched
//! once as given. A query containing it is searched once per letter of the
//! alphabet, with every placeholder replaced by that letter.
//!
//! # Architecture
//!
//! - **Substitution**: [`SubstitutionProcessor`] implementations, looked up
//!   by name in a [`StrategyRegistry`]
//! - **Driver**: the [`Driver`] state machine deciding between a single run
//!   and one run per substitution step, with cancellation
//! - **Pipeline**: engines, HTTP session and rendering live in the
//!   `dash-search` crate

pub mod config;
pub mod driver;
pub mod error;
pub mod substitution;

pub use config::DriverConfig;
pub use driver::{Driver, DriverState, RunSummary};
pub use error::{DashError, Result};
pub use substitution::{
    DEFAULT_STRATEGY, LetterCycler, PassThrough, StrategyRegistry, SubstitutionProcessor,
};
