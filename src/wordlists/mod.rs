//! Word lists for Crosswordle solving
//!
//! The two pools the solver works from: answer words that may sit on the
//! bottom row, and the larger set of words any row may be filled with.

pub mod loader;

use crate::core::Word;
use crate::error::CrosswordleError;
use std::path::Path;

/// The pair of word pools a solve runs against
///
/// Read-only once constructed; the feedback table builder and the solver
/// both borrow it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexicon {
    solutions: Vec<Word>,
    guesses: Vec<Word>,
}

impl Lexicon {
    /// Pair up a solution pool and a guess pool
    ///
    /// # Errors
    ///
    /// Returns `CrosswordleError::EmptyLexicon` if either pool is empty.
    pub fn new(solutions: Vec<Word>, guesses: Vec<Word>) -> Result<Self, CrosswordleError> {
        if solutions.is_empty() {
            return Err(CrosswordleError::EmptyLexicon("solution"));
        }
        if guesses.is_empty() {
            return Err(CrosswordleError::EmptyLexicon("guess"));
        }
        Ok(Self { solutions, guesses })
    }

    /// Load both pools from word list files
    ///
    /// # Errors
    ///
    /// Returns an error if either file cannot be read or parsed, or is empty.
    pub fn from_files<P: AsRef<Path>, Q: AsRef<Path>>(
        solutions: P,
        guesses: Q,
    ) -> Result<Self, CrosswordleError> {
        Self::new(
            loader::load_from_file(solutions)?,
            loader::load_from_file(guesses)?,
        )
    }

    /// Words that may act as the bottom-row solution
    #[must_use]
    pub fn solutions(&self) -> &[Word] {
        &self.solutions
    }

    /// Words any row may be filled with
    #[must_use]
    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }
}
