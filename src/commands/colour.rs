//! Colouring command
//!
//! Shows the tiles a guess earns against a solution.

use crate::core::{Colouring, Word};
use crate::error::CrosswordleError;

/// Result of colouring one guess
pub struct ColourResult {
    pub guess: Word,
    pub solution: Word,
    pub colouring: Colouring,
}

/// Colour `guess` against `solution`
///
/// # Errors
///
/// Returns `CrosswordleError::InvalidWord` if either word is invalid.
pub fn colour_words(guess: &str, solution: &str) -> Result<ColourResult, CrosswordleError> {
    let parse = |text: &str| {
        Word::new(text).map_err(|source| CrosswordleError::InvalidWord {
            word: text.to_string(),
            source,
        })
    };
    let guess = parse(guess)?;
    let solution = parse(solution)?;

    Ok(ColourResult {
        guess,
        solution,
        colouring: Colouring::calculate(&guess, &solution),
    })
}
