//! Formatting utilities for terminal output

use crate::core::{Colouring, Word};

/// Format a colouring as an emoji string
#[must_use]
pub fn colouring_to_emoji(colouring: Colouring) -> String {
    colouring.to_emoji()
}

/// Format a word in upper case with spaced letters, as drawn on a grid
#[must_use]
pub fn spaced_word(word: &Word) -> String {
    word.as_str()
        .to_uppercase()
        .chars()
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Lines for a solved stack, top row first, each beside its colouring
///
/// `stack` and `targets` are bottom-first, as the solver produces them.
#[must_use]
pub fn stack_lines(stack: &[Word], targets: &[Colouring]) -> Vec<String> {
    stack
        .iter()
        .zip(targets)
        .rev()
        .map(|(word, &target)| format!("{}  {}", colouring_to_emoji(target), spaced_word(word)))
        .collect()
}

/// Compact one-line form of a stack, top row first
#[must_use]
pub fn stack_summary(stack: &[Word]) -> String {
    stack
        .iter()
        .rev()
        .map(Word::as_str)
        .collect::<Vec<_>>()
        .join(" / ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn colouring_to_emoji_all_grey() {
        assert_eq!(colouring_to_emoji(Colouring::ALL_GREY), "⬜⬜⬜⬜⬜");
    }

    #[test]
    fn colouring_to_emoji_all_green() {
        assert_eq!(colouring_to_emoji(Colouring::ALL_GREEN), "🟩🟩🟩🟩🟩");
    }

    #[test]
    fn spaced_word_upper_case() {
        let word = Word::new("trace").unwrap();
        assert_eq!(spaced_word(&word), "T R A C E");
    }

    #[test]
    fn stack_lines_top_first() {
        let stack = words_from_slice(&["trace", "brace"]).unwrap();
        let targets = [Colouring::ALL_GREEN, "-GGGG".parse().unwrap()];

        let lines = stack_lines(&stack, &targets);
        assert_eq!(lines, ["⬜🟩🟩🟩🟩  B R A C E", "🟩🟩🟩🟩🟩  T R A C E"]);
        assert_eq!(stack_summary(&stack), "brace / trace");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }
}
