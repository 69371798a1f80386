//! Puzzle solving command
//!
//! Runs the backtracker over a puzzle and packages the outcome for display.

use crate::puzzle::Puzzle;
use crate::solver::{Backtracker, SearchLimits, SearchObserver, SearchOutcome};
use crate::table::FeedbackTable;

/// Configuration for solving a puzzle
#[derive(Debug, Clone, Copy, Default)]
pub struct SolveConfig {
    pub limits: SearchLimits,
    pub parallel: bool,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(limits: SearchLimits, parallel: bool) -> Self {
        Self { limits, parallel }
    }
}

/// Result of solving a puzzle
pub struct SolveResult {
    pub outcome: SearchOutcome,
    pub candidates: usize,
    pub height: usize,
}

/// Solve `puzzle` against `table`
pub fn solve_puzzle(
    config: &SolveConfig,
    table: &FeedbackTable,
    puzzle: &Puzzle,
    observer: &dyn SearchObserver,
) -> SolveResult {
    let solver = Backtracker::new(table, puzzle).with_limits(config.limits);
    let outcome = if config.parallel {
        solver.solve_parallel(observer)
    } else {
        solver.solve_with_observer(observer)
    };

    SolveResult {
        outcome,
        candidates: puzzle.candidates().len(),
        height: puzzle.height(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Colouring;
    use crate::puzzle::PuzzleCode;
    use crate::solver::{NoSearchProgress, StopReason};
    use crate::wordlists::Lexicon;
    use crate::wordlists::loader::words_from_slice;

    fn fixture() -> (FeedbackTable, Puzzle) {
        let words = words_from_slice(&["trace", "brace", "grace", "lumpy", "bumpy"]).unwrap();
        let lexicon = Lexicon::new(words.clone(), words.clone()).unwrap();
        let table = FeedbackTable::build(&lexicon).unwrap();

        // Top row first in the shared code: blank, -GGGG, then the solution
        let code = PuzzleCode::parse("v2-0,80,242-x,x,0t").unwrap();
        let puzzle = code.into_puzzle(&words).unwrap();
        (table, puzzle)
    }

    #[test]
    fn solve_finds_all_stacks() {
        let (table, puzzle) = fixture();
        assert_eq!(puzzle.targets()[1], "-GGGG".parse::<Colouring>().unwrap());

        let result = solve_puzzle(&SolveConfig::default(), &table, &puzzle, &NoSearchProgress);

        assert_eq!(result.candidates, 1);
        assert_eq!(result.height, 3);
        assert!(result.outcome.is_complete());
        let tops: Vec<(&str, &str)> = result
            .outcome
            .solutions
            .iter()
            .map(|s| (s[1].as_str(), s[2].as_str()))
            .collect();
        // BRACE spends B on grey, so BUMPY may not follow it
        assert_eq!(
            tops,
            [("brace", "lumpy"), ("grace", "lumpy"), ("grace", "bumpy")]
        );
    }

    #[test]
    fn parallel_solve_agrees() {
        let (table, puzzle) = fixture();
        let sequential = solve_puzzle(&SolveConfig::default(), &table, &puzzle, &NoSearchProgress);
        let parallel = solve_puzzle(
            &SolveConfig::new(SearchLimits::default(), true),
            &table,
            &puzzle,
            &NoSearchProgress,
        );
        assert_eq!(parallel.outcome.solutions, sequential.outcome.solutions);
    }

    #[test]
    fn solve_respects_limits() {
        let (table, puzzle) = fixture();
        let config = SolveConfig::new(
            SearchLimits {
                max_solutions: Some(2),
                timeout: None,
            },
            false,
        );
        let result = solve_puzzle(&config, &table, &puzzle, &NoSearchProgress);

        assert_eq!(result.outcome.solutions.len(), 2);
        assert_eq!(result.outcome.stopped, Some(StopReason::SolutionLimit));
    }
}
