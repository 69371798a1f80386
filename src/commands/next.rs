//! Next-row command
//!
//! Runs a single row extension step for a partial stack, which is handy for
//! checking a puzzle by hand one row at a time.

use crate::core::{Colouring, Word};
use crate::error::CrosswordleError;
use crate::solver::extend;
use crate::table::FeedbackTable;

/// Legal words for the next row of a partial stack
pub struct NextRows {
    pub stack: Vec<Word>,
    pub target: Colouring,
    pub options: Vec<Word>,
}

/// List the legal words for the row above `stack`
///
/// # Errors
///
/// Returns `CrosswordleError::InvalidPuzzle` if the stack is empty or already
/// as tall as `targets`.
pub fn next_rows(
    table: &FeedbackTable,
    targets: &[Colouring],
    stack: Vec<Word>,
) -> Result<NextRows, CrosswordleError> {
    let Some(&target) = targets.get(stack.len()).filter(|_| !stack.is_empty()) else {
        return Err(CrosswordleError::InvalidPuzzle {
            input: stack
                .iter()
                .map(Word::as_str)
                .collect::<Vec<_>>()
                .join(","),
            reason: format!(
                "need between 1 and {} stacked words for {} colourings",
                targets.len().saturating_sub(1),
                targets.len()
            ),
        });
    };

    let options = extend(&stack, targets, table);
    Ok(NextRows {
        stack,
        target,
        options,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::Lexicon;
    use crate::wordlists::loader::words_from_slice;

    fn table() -> FeedbackTable {
        let words = words_from_slice(&["trace", "brace", "grace", "crate"]).unwrap();
        FeedbackTable::build(&Lexicon::new(words.clone(), words).unwrap()).unwrap()
    }

    #[test]
    fn next_rows_for_bottom_word() {
        let targets = [Colouring::ALL_GREEN, "-GGGG".parse().unwrap()];
        let stack = words_from_slice(&["trace"]).unwrap();

        let next = next_rows(&table(), &targets, stack).unwrap();
        let texts: Vec<&str> = next.options.iter().map(Word::as_str).collect();
        assert_eq!(texts, ["brace", "grace"]);
        assert_eq!(next.target, targets[1]);
    }

    #[test]
    fn next_rows_rejects_bad_stack_height() {
        let targets = [Colouring::ALL_GREEN, "-GGGG".parse().unwrap()];
        let full = words_from_slice(&["trace", "brace"]).unwrap();

        assert!(next_rows(&table(), &targets, vec![]).is_err());
        assert!(next_rows(&table(), &targets, full).is_err());
    }
}
