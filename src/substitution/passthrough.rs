//! Single-step processor that leaves the query untouched.

use super::SubstitutionProcessor;
use crate::error::{DashError, Result};

/// Returns its input unchanged once, then reports done.
///
/// Selecting this strategy searches for the literal query even when it
/// contains dashes.
#[derive(Debug, Clone, Default)]
pub struct PassThrough {
    done: bool,
}

impl PassThrough {
    /// A fresh, not-yet-used pass-through processor.
    pub fn new() -> Self {
        Self::default()
    }
}

impl SubstitutionProcessor for PassThrough {
    fn name(&self) -> &'static str {
        "passthrough"
    }

    fn process(&mut self, input: &str) -> Result<String> {
        if self.done {
            return Err(DashError::Exhausted(
                "pass-through has already produced its query".into(),
            ));
        }
        self.done = true;
        Ok(input.to_owned())
    }

    fn is_done(&self) -> bool {
        self.done
    }

    fn current_symbol(&self) -> &str {
        ""
    }
}
