//! Precomputed feedback table
//!
//! Maps `(solution, colouring)` to every guess that produces that colouring
//! against that solution. Built once per lexicon (or loaded from a cache) and
//! read-only afterwards, so it can be shared freely across search workers.

mod builder;
pub mod cache;

pub use builder::{BuildProgress, NoBuildProgress};

use crate::core::{Colouring, Word};
use crate::wordlists::Lexicon;
use rustc_hash::{FxHashMap, FxHasher};
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// Lookup from `(solution, colouring)` to the guesses producing it
///
/// Bucket contents keep guess-pool order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackTable {
    buckets: FxHashMap<(Word, Colouring), Vec<Word>>,
    solution_count: usize,
    guess_count: usize,
    fingerprint: u64,
}

/// Digest of both word pools, in order
///
/// Two lexicons with the same digest produce the same table.
#[must_use]
pub fn lexicon_fingerprint(lexicon: &Lexicon) -> u64 {
    let mut hasher = FxHasher::default();
    lexicon.solutions().hash(&mut hasher);
    lexicon.guesses().hash(&mut hasher);
    hasher.finish()
}

impl FeedbackTable {
    /// All guesses colouring as `colouring` against `solution`
    ///
    /// A missing bucket is an empty slice: the normal sign of a dead branch.
    #[must_use]
    pub fn lookup(&self, solution: &Word, colouring: Colouring) -> &[Word] {
        self.buckets
            .get(&(*solution, colouring))
            .map_or(&[], Vec::as_slice)
    }

    /// Number of non-empty `(solution, colouring)` buckets
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Total number of `(solution, guess)` pairs recorded
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    /// Size of the solution pool this table was built from
    #[must_use]
    pub const fn solution_count(&self) -> usize {
        self.solution_count
    }

    /// Size of the guess pool this table was built from
    #[must_use]
    pub const fn guess_count(&self) -> usize {
        self.guess_count
    }

    /// Digest of the word pools this table was built from
    #[must_use]
    pub const fn fingerprint(&self) -> u64 {
        self.fingerprint
    }

    /// Whether this table was built from exactly the lexicon's word pools
    #[must_use]
    pub fn matches_lexicon(&self, lexicon: &Lexicon) -> bool {
        self.solution_count == lexicon.solutions().len()
            && self.guess_count == lexicon.guesses().len()
            && self.fingerprint == lexicon_fingerprint(lexicon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    #[test]
    fn lookup_miss_is_empty() {
        let table = FeedbackTable::default();
        assert!(table.is_empty());
        assert!(table.lookup(&word("trace"), Colouring::ALL_GREY).is_empty());
    }

    #[test]
    fn matches_lexicon_compares_pool_sizes() {
        let solutions = words_from_slice(&["trace", "crane"]).unwrap();
        let guesses = words_from_slice(&["trace", "crane", "slate"]).unwrap();
        let lexicon = Lexicon::new(solutions.clone(), guesses).unwrap();
        let table = FeedbackTable::build(&lexicon).unwrap();
        assert!(table.matches_lexicon(&lexicon));

        let other = Lexicon::new(solutions.clone(), solutions).unwrap();
        assert!(!table.matches_lexicon(&other));
    }

    #[test]
    fn matches_lexicon_rejects_same_sized_pools() {
        let lexicon = Lexicon::new(
            words_from_slice(&["trace"]).unwrap(),
            words_from_slice(&["trace", "brace"]).unwrap(),
        )
        .unwrap();
        let other = Lexicon::new(
            words_from_slice(&["slate"]).unwrap(),
            words_from_slice(&["slate", "plate"]).unwrap(),
        )
        .unwrap();
        let table = FeedbackTable::build(&lexicon).unwrap();

        assert!(table.matches_lexicon(&lexicon));
        assert!(!table.matches_lexicon(&other));
        assert_ne!(lexicon_fingerprint(&lexicon), lexicon_fingerprint(&other));
    }

    #[test]
    fn fingerprint_depends_on_order() {
        let words = words_from_slice(&["trace", "brace"]).unwrap();
        let mut reversed = words.clone();
        reversed.reverse();

        let forward = Lexicon::new(words.clone(), words).unwrap();
        let backward = Lexicon::new(reversed.clone(), reversed).unwrap();
        assert_ne!(lexicon_fingerprint(&forward), lexicon_fingerprint(&backward));
    }
}
