//! Puzzle input
//!
//! A puzzle is the sequence of target colourings (bottom row first) plus the
//! words allowed on the bottom row.

pub mod parser;

pub use parser::{Pin, PuzzleCode, parse_colourings};

use crate::core::{Colouring, Word};
use crate::error::CrosswordleError;

/// Target colourings and bottom-row candidates for one solve
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    targets: Vec<Colouring>,
    candidates: Vec<Word>,
}

impl Puzzle {
    /// Create a puzzle from bottom-first target colourings
    ///
    /// An empty candidate list is allowed and simply has no solutions.
    ///
    /// # Errors
    ///
    /// Returns `CrosswordleError::EmptyPuzzle` if `targets` is empty.
    pub fn new(targets: Vec<Colouring>, candidates: Vec<Word>) -> Result<Self, CrosswordleError> {
        if targets.is_empty() {
            return Err(CrosswordleError::EmptyPuzzle);
        }
        Ok(Self {
            targets,
            candidates,
        })
    }

    /// Number of rows in a complete stack
    #[must_use]
    pub fn height(&self) -> usize {
        self.targets.len()
    }

    /// Target colourings, row 0 (bottom) first
    #[must_use]
    pub fn targets(&self) -> &[Colouring] {
        &self.targets
    }

    /// Words admissible on row 0
    #[must_use]
    pub fn candidates(&self) -> &[Word] {
        &self.candidates
    }
}
