//! Row extension filter
//!
//! Given a partial stack (bottom row first) and the puzzle's target
//! colourings, works out which words may legally sit on the next row up.
//!
//! Every row is coloured against the bottom-row word, so candidates come from
//! the feedback table bucket for `(stack[0], target)`. They are then filtered
//! by the Crosswordle placement rules:
//! 1. a letter that has sat on a grey tile in any earlier row may not sit on
//!    a grey tile again;
//! 2. a letter on a yellow or grey tile may not sit in a column where that
//!    letter appeared in any earlier row;
//! 3. the green and yellow letters of the new row must be a sub-multiset of
//!    the green and yellow letters of the row directly below it.

use crate::core::{ALPHABET_LEN, Colouring, Tile, WORD_LEN, Word};
use crate::table::FeedbackTable;

/// Set of letters, one bit per letter of the alphabet
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LetterSet(u32);

impl LetterSet {
    pub fn insert(&mut self, letter: u8) {
        self.0 |= 1 << (letter - b'a');
    }

    #[must_use]
    pub const fn contains(self, letter: u8) -> bool {
        self.0 & (1 << (letter - b'a')) != 0
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

/// Multiset of letters, as a count per letter of the alphabet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterCounts([u8; ALPHABET_LEN]);

impl Default for LetterCounts {
    fn default() -> Self {
        Self([0; ALPHABET_LEN])
    }
}

impl LetterCounts {
    pub fn add(&mut self, letter: u8) {
        self.0[usize::from(letter - b'a')] += 1;
    }

    #[must_use]
    pub fn from_letters(letters: &[u8]) -> Self {
        let mut counts = Self::default();
        for &letter in letters {
            counts.add(letter);
        }
        counts
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.0.iter().map(|&n| usize::from(n)).sum()
    }
}

/// Whether `sub` can be obtained from `full` by deletions only
///
/// Multiplicities count: `{a, a}` is within `{a, a, b}` but not `{a, b}`.
/// Neither argument is modified.
#[must_use]
pub fn is_sub_multiset(sub: &LetterCounts, full: &LetterCounts) -> bool {
    sub.0.iter().zip(&full.0).all(|(s, f)| s <= f)
}

/// Every letter that has occupied a grey tile in the stack so far
///
/// Rows are paired with their own target colourings.
#[must_use]
pub fn grey_letters(stack: &[Word], targets: &[Colouring]) -> LetterSet {
    let mut greys = LetterSet::default();
    for (word, colouring) in stack.iter().zip(targets) {
        for (&letter, tile) in word.letters().iter().zip(colouring.tiles()) {
            if tile.is_grey() {
                greys.insert(letter);
            }
        }
    }
    greys
}

/// Whether `letter` sat at `position` in any row of the stack
#[must_use]
pub fn is_aligned(letter: u8, position: usize, stack: &[Word]) -> bool {
    stack.iter().any(|word| word.letter_at(position) == letter)
}

/// Letters of `word` on green or yellow tiles under `colouring`
#[must_use]
pub fn non_grey_letters(word: &Word, colouring: Colouring) -> LetterCounts {
    let mut counts = LetterCounts::default();
    for (&letter, tile) in word.letters().iter().zip(colouring.tiles()) {
        if !tile.is_grey() {
            counts.add(letter);
        }
    }
    counts
}

/// Everything the legality rules need to know about the rows below
#[derive(Debug, Clone)]
pub struct RowContext<'a> {
    stack: &'a [Word],
    greys: LetterSet,
    below: LetterCounts,
}

impl<'a> RowContext<'a> {
    /// Context for the row above `stack`
    ///
    /// Returns `None` for an empty stack, or when `targets` has no colouring
    /// for the stack's top row.
    #[must_use]
    pub fn new(stack: &'a [Word], targets: &[Colouring]) -> Option<Self> {
        let below_row = stack.len().checked_sub(1)?;
        let below_word = stack.get(below_row)?;
        let below_colouring = targets.get(below_row)?;

        Some(Self {
            stack,
            greys: grey_letters(stack, targets),
            below: non_grey_letters(below_word, *below_colouring),
        })
    }

    /// Letters already spent on grey tiles
    #[must_use]
    pub const fn greys(&self) -> LetterSet {
        self.greys
    }

    /// Whether `word` may be placed on the next row with tiles `tiles`
    #[must_use]
    pub fn is_legal(&self, word: &Word, tiles: &[Tile; WORD_LEN]) -> bool {
        let mut non_greys = LetterCounts::default();

        for (position, (&letter, &tile)) in word.letters().iter().zip(tiles).enumerate() {
            match tile {
                Tile::Grey => {
                    if self.greys.contains(letter) || is_aligned(letter, position, self.stack) {
                        return false;
                    }
                }
                Tile::Yellow => {
                    if is_aligned(letter, position, self.stack) {
                        return false;
                    }
                    non_greys.add(letter);
                }
                Tile::Green => non_greys.add(letter),
            }
        }

        is_sub_multiset(&non_greys, &self.below)
    }
}

/// Legal words for the row above `stack`, in feedback table order
///
/// `stack` is bottom row first and must be non-empty and shorter than
/// `targets`; otherwise there is nothing to extend and the result is empty.
/// An empty result is a dead branch, not an error.
///
/// # Examples
/// ```
/// use crosswordle_solver::core::{Colouring, Word};
/// use crosswordle_solver::solver::extend;
/// use crosswordle_solver::table::FeedbackTable;
/// use crosswordle_solver::wordlists::{Lexicon, loader::words_from_slice};
///
/// let lexicon = Lexicon::new(
///     words_from_slice(&["trace"]).unwrap(),
///     words_from_slice(&["trace", "brace", "crate"]).unwrap(),
/// )
/// .unwrap();
/// let table = FeedbackTable::build(&lexicon).unwrap();
///
/// let trace = Word::new("trace").unwrap();
/// let targets = [Colouring::ALL_GREEN, "-GGGG".parse().unwrap()];
/// let next = extend(&[trace], &targets, &table);
/// assert_eq!(next, [Word::new("brace").unwrap()]);
/// ```
#[must_use]
pub fn extend(stack: &[Word], targets: &[Colouring], table: &FeedbackTable) -> Vec<Word> {
    let (Some(solution), Some(&target)) = (stack.first(), targets.get(stack.len())) else {
        return Vec::new();
    };
    let Some(context) = RowContext::new(stack, targets) else {
        return Vec::new();
    };

    let tiles = target.tiles();
    table
        .lookup(solution, target)
        .iter()
        .filter(|word| context.is_legal(word, &tiles))
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::Lexicon;
    use crate::wordlists::loader::words_from_slice;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    fn counts(s: &str) -> LetterCounts {
        LetterCounts::from_letters(s.as_bytes())
    }

    fn colouring(s: &str) -> Colouring {
        s.parse().unwrap()
    }

    fn table_for(solutions: &[&str], guesses: &[&str]) -> FeedbackTable {
        let lexicon = Lexicon::new(
            words_from_slice(solutions).unwrap(),
            words_from_slice(guesses).unwrap(),
        )
        .unwrap();
        FeedbackTable::build(&lexicon).unwrap()
    }

    #[test]
    fn sub_multiset_respects_multiplicity() {
        assert!(is_sub_multiset(&counts("aa"), &counts("aab")));
        assert!(!is_sub_multiset(&counts("aa"), &counts("ab")));
        assert!(is_sub_multiset(&counts(""), &counts("ab")));
        assert!(is_sub_multiset(&counts("ba"), &counts("ab")));
        assert!(!is_sub_multiset(&counts("c"), &counts("ab")));
    }

    #[test]
    fn sub_multiset_leaves_arguments_untouched() {
        let sub = counts("aa");
        let full = counts("aab");
        assert!(is_sub_multiset(&sub, &full));
        assert!(is_sub_multiset(&sub, &full));
        assert_eq!(full.total(), 3);
        assert_eq!(sub.total(), 2);
    }

    #[test]
    fn grey_letters_include_otherwise_coloured_letters() {
        // E is grey in the second row even though it is green in the first
        let stack = [word("there"), word("eerie")];
        let targets = [Colouring::ALL_GREEN, colouring("Y-Y-G"), Colouring::ALL_GREY];

        let greys = grey_letters(&stack, &targets);
        assert!(greys.contains(b'e'));
        assert!(greys.contains(b'i'));
        assert!(!greys.contains(b'r'));
        assert!(!greys.contains(b't'));
    }

    #[test]
    fn grey_letters_of_all_green_bottom_is_empty() {
        let greys = grey_letters(&[word("trace")], &[Colouring::ALL_GREEN]);
        assert!(greys.is_empty());
    }

    #[test]
    fn aligned_checks_every_row() {
        let stack = [word("trace"), word("crane")];
        assert!(is_aligned(b't', 0, &stack));
        assert!(is_aligned(b'c', 0, &stack));
        assert!(is_aligned(b'n', 3, &stack));
        assert!(!is_aligned(b'n', 2, &stack));
    }

    #[test]
    fn non_grey_letters_follow_colouring() {
        let letters = non_grey_letters(&word("crane"), colouring("YGG-G"));
        assert_eq!(letters, counts("crae"));
    }

    #[test]
    fn rule_one_rejects_reused_grey_letter() {
        // Row 1 spends N on a grey tile; row 2 may not put N on grey again
        let stack = [word("trace"), word("crane")];
        let targets = [Colouring::ALL_GREEN, colouring("YGG-G"), Colouring::ALL_GREY];
        let context = RowContext::new(&stack, &targets).unwrap();

        let tiles = colouring("-----").tiles();
        assert!(context.greys().contains(b'n'));
        assert!(!context.is_legal(&word("lunky"), &tiles));
        assert!(context.is_legal(&word("lumpy"), &tiles));
    }

    #[test]
    fn rule_one_allows_grey_letter_on_coloured_tile() {
        // TERSE spends its first E on a grey tile; RIDGE may still show E green
        let stack = [word("trace"), word("terse")];
        let targets = [Colouring::ALL_GREEN, colouring("G-Y-G"), colouring("Y---G")];
        let context = RowContext::new(&stack, &targets).unwrap();

        assert!(context.greys().contains(b'e'));
        assert!(context.is_legal(&word("ridge"), &targets[2].tiles()));
    }

    #[test]
    fn rule_two_rejects_aligned_yellow_and_grey() {
        let stack = [word("trace")];
        let targets = [Colouring::ALL_GREEN, colouring("Y----")];
        let context = RowContext::new(&stack, &targets).unwrap();
        let tiles = targets[1].tiles();

        // T on a yellow tile in column 0, where TRACE has its T
        assert!(!context.is_legal(&word("tools"), &tiles));
        // Grey tile in column 1 holding R, aligned with TRACE's R
        let grey_tiles = colouring("-----").tiles();
        assert!(!context.is_legal(&word("bring"), &grey_tiles));
        assert!(context.is_legal(&word("bumpy"), &grey_tiles));
    }

    #[test]
    fn rule_three_requires_containment_in_row_below() {
        // CASTE keeps C, A, T, E coloured; R is no longer available above it
        let stack = [word("trace"), word("caste")];
        let targets = [Colouring::ALL_GREEN, colouring("YY-YG"), colouring("Y----")];
        let context = RowContext::new(&stack, &targets).unwrap();
        let tiles = targets[2].tiles();

        assert!(context.is_legal(&word("abbot"), &tiles));
        assert!(!context.is_legal(&word("rugby"), &tiles));
    }

    #[test]
    fn first_extension_uses_bottom_row_as_baseline() {
        let stack = [word("trace")];
        let targets = [Colouring::ALL_GREEN, colouring("YGG-G")];
        let context = RowContext::new(&stack, &targets).unwrap();

        assert!(context.is_legal(&word("crane"), &targets[1].tiles()));
    }

    #[test]
    fn extend_filters_table_bucket() {
        let table = table_for(
            &["trace"],
            &["trace", "crane", "crate", "react", "caret", "grace"],
        );
        let stack = [word("trace")];

        // GRACE colours -GGGG against TRACE, but G on grey above T is fine
        let targets = [Colouring::ALL_GREEN, colouring("-GGGG")];
        assert_eq!(extend(&stack, &targets, &table), [word("grace")]);

        // CRATE: C yellow in column 0, T yellow in column 3, E green
        let targets = [Colouring::ALL_GREEN, colouring("YGGYG")];
        assert_eq!(extend(&stack, &targets, &table), [word("crate")]);
    }

    #[test]
    fn extend_lookup_miss_is_empty() {
        let table = table_for(&["trace"], &["trace", "crane"]);
        let targets = [Colouring::ALL_GREEN, Colouring::ALL_GREY];
        assert!(extend(&[word("trace")], &targets, &table).is_empty());
    }

    #[test]
    fn extend_needs_room_above() {
        let table = table_for(&["trace"], &["trace", "crane"]);
        assert!(extend(&[], &[Colouring::ALL_GREEN], &table).is_empty());
        assert!(extend(&[word("trace")], &[Colouring::ALL_GREEN], &table).is_empty());
    }

    #[test]
    fn extend_is_idempotent() {
        let table = table_for(
            &["trace"],
            &["trace", "crane", "crate", "react", "caret", "cater", "recta"],
        );
        let stack = [word("trace")];
        let targets = [Colouring::ALL_GREEN, colouring("YYYYY")];

        let first = extend(&stack, &targets, &table);
        let second = extend(&stack, &targets, &table);
        assert_eq!(first, second);
    }
}
