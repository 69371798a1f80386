//! All-pairs feedback table construction
//!
//! Every guess is coloured against every solution once. This is the dominant
//! cost of the whole solver (|solutions| × |guesses| colourings), so it runs
//! in parallel over solutions and is meant to be cached between runs.

use super::{FeedbackTable, lexicon_fingerprint};
use crate::core::{COLOURING_COUNT, Colouring, Word};
use crate::error::CrosswordleError;
use crate::wordlists::Lexicon;
use rayon::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};

/// Observer for table construction progress
///
/// Purely presentational; implementations must not influence the result.
/// Called from worker threads, hence `Sync`.
pub trait BuildProgress: Sync {
    /// Construction is starting over `solutions` distinct solution words
    fn on_start(&self, _solutions: usize) {}

    /// One solution word has been coloured against the whole guess pool
    fn on_solution(&self) {}

    /// Construction finished with `buckets` non-empty buckets
    fn on_finish(&self, _buckets: usize) {}
}

/// Progress observer that ignores everything
pub struct NoBuildProgress;

impl BuildProgress for NoBuildProgress {}

impl FeedbackTable {
    /// Build the table for a lexicon
    ///
    /// # Errors
    ///
    /// Returns `CrosswordleError::TableTooLarge` if the bucket map cannot be allocated.
    ///
    /// # Examples
    /// ```
    /// use crosswordle_solver::core::{Colouring, Word};
    /// use crosswordle_solver::table::FeedbackTable;
    /// use crosswordle_solver::wordlists::{Lexicon, loader::words_from_slice};
    ///
    /// let solutions = words_from_slice(&["trace"]).unwrap();
    /// let guesses = words_from_slice(&["crane", "trace", "slate"]).unwrap();
    /// let lexicon = Lexicon::new(solutions, guesses).unwrap();
    ///
    /// let table = FeedbackTable::build(&lexicon).unwrap();
    /// let trace = Word::new("trace").unwrap();
    /// let crane = Word::new("crane").unwrap();
    ///
    /// let bucket = table.lookup(&trace, Colouring::calculate(&crane, &trace));
    /// assert_eq!(bucket, &[crane]);
    /// ```
    pub fn build(lexicon: &Lexicon) -> Result<Self, CrosswordleError> {
        Self::build_with_progress(lexicon, &NoBuildProgress)
    }

    /// Build the table, reporting progress once per solution word
    ///
    /// # Errors
    ///
    /// Returns `CrosswordleError::TableTooLarge` if the bucket map cannot be
    /// allocated. No partial table is ever returned.
    pub fn build_with_progress(
        lexicon: &Lexicon,
        progress: &dyn BuildProgress,
    ) -> Result<Self, CrosswordleError> {
        // Repeated solution words would record their pairs twice
        let mut seen = FxHashSet::default();
        let solutions: Vec<Word> = lexicon
            .solutions()
            .iter()
            .copied()
            .filter(|word| seen.insert(*word))
            .collect();

        progress.on_start(solutions.len());

        let grouped: Vec<Vec<(Colouring, Vec<Word>)>> = solutions
            .par_iter()
            .map(|solution| {
                let groups = group_guesses(solution, lexicon.guesses());
                progress.on_solution();
                groups
            })
            .collect();

        let entries = grouped.iter().map(Vec::len).sum();
        let mut buckets = FxHashMap::default();
        buckets
            .try_reserve(entries)
            .map_err(|_| CrosswordleError::TableTooLarge { entries })?;

        for (solution, groups) in solutions.iter().zip(grouped) {
            for (colouring, guesses) in groups {
                buckets.insert((*solution, colouring), guesses);
            }
        }

        progress.on_finish(buckets.len());

        Ok(Self {
            buckets,
            solution_count: lexicon.solutions().len(),
            guess_count: lexicon.guesses().len(),
            fingerprint: lexicon_fingerprint(lexicon),
        })
    }
}

/// Group the guess pool by the colouring each guess shows against `solution`
///
/// A word is never paired with itself. Groups keep guess-pool order.
fn group_guesses(solution: &Word, guesses: &[Word]) -> Vec<(Colouring, Vec<Word>)> {
    let mut groups: Vec<Vec<Word>> = vec![Vec::new(); COLOURING_COUNT as usize];

    for guess in guesses.iter().filter(|&guess| guess != solution) {
        let colouring = Colouring::calculate(guess, solution);
        groups[usize::from(colouring.code())].push(*guess);
    }

    groups
        .into_iter()
        .enumerate()
        .filter(|(_, group)| !group.is_empty())
        .filter_map(|(code, group)| {
            let colouring = Colouring::new(u32::try_from(code).ok()?).ok()?;
            Some((colouring, group))
        })
        .collect()
}
