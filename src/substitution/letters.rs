//! Placeholder-to-letter substitution, `a` through `z`.

use super::SubstitutionProcessor;
use crate::error::{DashError, Result};

/// Replacement symbols, in the order they are used.
pub const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

/// Character replaced by [`LetterCycler`] unless configured otherwise.
pub const DEFAULT_PLACEHOLDER: char = '-';

/// Replaces every placeholder with `a` on the first call, `b` on the second,
/// and so on. Done after the 26th call.
#[derive(Debug, Clone)]
pub struct LetterCycler {
    /// Index into [`ALPHABET`] of the next symbol; `ALPHABET.len()` when done.
    cursor: usize,
    placeholder: char,
}

impl Default for LetterCycler {
    fn default() -> Self {
        Self::new()
    }
}

impl LetterCycler {
    /// Cycler replacing [`DEFAULT_PLACEHOLDER`].
    pub fn new() -> Self {
        Self::with_placeholder(DEFAULT_PLACEHOLDER)
    }

    /// Cycler replacing `placeholder` instead of `-`.
    pub fn with_placeholder(placeholder: char) -> Self {
        Self {
            cursor: 0,
            placeholder,
        }
    }

    /// Number of `process` calls left before completion.
    pub fn remaining(&self) -> usize {
        ALPHABET.len() - self.cursor
    }
}

impl SubstitutionProcessor for LetterCycler {
    fn name(&self) -> &'static str {
        "letters"
    }

    fn process(&mut self, input: &str) -> Result<String> {
        if self.is_done() {
            return Err(DashError::Exhausted(format!(
                "all {} letters have been used",
                ALPHABET.len()
            )));
        }

        let symbol = &ALPHABET[self.cursor..=self.cursor];
        let output = input.replace(self.placeholder, symbol);
        self.cursor += 1;
        Ok(output)
    }

    fn is_done(&self) -> bool {
        self.cursor >= ALPHABET.len()
    }

    fn current_symbol(&self) -> &str {
        if self.is_done() {
            ""
        } else {
            &ALPHABET[self.cursor..=self.cursor]
        }
    }

    fn placeholder(&self) -> Option<char> {
        Some(self.placeholder)
    }
}
