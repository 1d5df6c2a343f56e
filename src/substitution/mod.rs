//! Query substitution processors.
//!
//! A [`SubstitutionProcessor`] turns one raw query into a finite sequence
//! of query variants, one per [`process`](SubstitutionProcessor::process)
//! call. The driver loop keeps asking for variants until
//! [`is_done`](SubstitutionProcessor::is_done) reports completion.
//!
//! Processors are looked up by name through a [`StrategyRegistry`].

pub mod letters;
pub mod passthrough;
pub mod registry;

pub use letters::LetterCycler;
pub use passthrough::PassThrough;
pub use registry::{DEFAULT_STRATEGY, ProcessorFactory, StrategyRegistry};

use crate::error::Result;

/// A stateful text transformer with a finite number of steps.
///
/// Calling [`process`](Self::process) once [`is_done`](Self::is_done)
/// returns `true` is a precondition violation and fails with
/// [`DashError::Exhausted`](crate::DashError::Exhausted).
pub trait SubstitutionProcessor: Send {
    /// Registry name of this strategy.
    fn name(&self) -> &'static str;

    /// Produce the next variant of `input` and advance.
    ///
    /// # Errors
    ///
    /// Returns [`DashError::Exhausted`](crate::DashError::Exhausted) when
    /// called after the last step has been used.
    fn process(&mut self, input: &str) -> Result<String>;

    /// `true` once every step has been used.
    fn is_done(&self) -> bool;

    /// The symbol the next [`process`](Self::process) call will substitute,
    /// or `""` once done or when the strategy substitutes nothing.
    fn current_symbol(&self) -> &str;

    /// The character this processor replaces, if any.
    ///
    /// The driver runs a single search with the raw query when this is
    /// `None` or does not occur in the query.
    fn placeholder(&self) -> Option<char> {
        None
    }
}
