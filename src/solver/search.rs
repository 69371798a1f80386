//! Backtracking search over row stacks
//!
//! Depth-first, bottom-up: row 0 comes from the puzzle's candidate list, each
//! further row from [`extend`]. Once the stack is one row short of the full
//! height, every remaining option completes a solution without further
//! checks, since no row sits above the top one.

use super::filter::extend;
use crate::core::Word;
use crate::puzzle::Puzzle;
use crate::table::FeedbackTable;
use rayon::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

/// How many recursive steps between deadline checks
pub const INTERRUPT_FREQUENCY: usize = 64;

/// A complete stack of words, row 0 (bottom) first
pub type RowStack = Vec<Word>;

/// Caller-imposed limits on a search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchLimits {
    /// Stop once this many solutions have been found
    pub max_solutions: Option<usize>,
    /// Stop once this much time has passed
    pub timeout: Option<Duration>,
}

/// Why a search ended before exploring every branch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The solution cap was filled, even if nothing was left to explore
    SolutionLimit,
    Timeout,
}

/// Result of a search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Complete stacks in depth-first discovery order
    pub solutions: Vec<RowStack>,
    /// `None` when the search space was exhausted
    pub stopped: Option<StopReason>,
    pub elapsed: Duration,
}

impl SearchOutcome {
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.stopped.is_none()
    }
}

/// Observer for search progress at row-0 branch boundaries
///
/// Purely presentational. Called from worker threads in parallel searches.
pub trait SearchObserver: Sync {
    /// The search is starting over `candidates` row-0 words
    fn on_start(&self, _candidates: usize) {}

    /// `done` of `total` row-0 branches are finished, `found` solutions so far
    ///
    /// In a parallel search `found` is the running total over finished branches,
    /// before the final merge trims it to the solution cap.
    fn on_branch(&self, _done: usize, _total: usize, _found: usize) {}

    /// The search ended with `found` solutions
    fn on_finish(&self, _found: usize) {}
}

/// Observer that ignores everything
pub struct NoSearchProgress;

impl SearchObserver for NoSearchProgress {}

/// Depth-first Crosswordle solver over a shared, read-only feedback table
pub struct Backtracker<'a> {
    table: &'a FeedbackTable,
    puzzle: &'a Puzzle,
    limits: SearchLimits,
}

impl<'a> Backtracker<'a> {
    #[must_use]
    pub const fn new(table: &'a FeedbackTable, puzzle: &'a Puzzle) -> Self {
        Self {
            table,
            puzzle,
            limits: SearchLimits {
                max_solutions: None,
                timeout: None,
            },
        }
    }

    #[must_use]
    pub const fn with_limits(mut self, limits: SearchLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Find every solution, one row-0 branch after another
    #[must_use]
    pub fn solve(&self) -> SearchOutcome {
        self.solve_with_observer(&NoSearchProgress)
    }

    /// Find every solution, reporting after each row-0 branch
    ///
    /// # Examples
    /// ```
    /// use crosswordle_solver::core::{Colouring, Word};
    /// use crosswordle_solver::puzzle::Puzzle;
    /// use crosswordle_solver::solver::{Backtracker, NoSearchProgress};
    /// use crosswordle_solver::table::FeedbackTable;
    /// use crosswordle_solver::wordlists::{Lexicon, loader::words_from_slice};
    ///
    /// let words = words_from_slice(&["trace", "brace", "grace"]).unwrap();
    /// let lexicon = Lexicon::new(words.clone(), words).unwrap();
    /// let table = FeedbackTable::build(&lexicon).unwrap();
    ///
    /// let targets = vec![Colouring::ALL_GREEN, "-GGGG".parse().unwrap()];
    /// let puzzle = Puzzle::new(targets, vec![Word::new("trace").unwrap()]).unwrap();
    ///
    /// let outcome = Backtracker::new(&table, &puzzle).solve_with_observer(&NoSearchProgress);
    /// assert_eq!(outcome.solutions.len(), 2);
    /// assert!(outcome.is_complete());
    /// ```
    #[must_use]
    pub fn solve_with_observer(&self, observer: &dyn SearchObserver) -> SearchOutcome {
        let start = Instant::now();
        let candidates = self.puzzle.candidates();
        let mut state = SearchState::new(self.limits, start);

        observer.on_start(candidates.len());

        if self.puzzle.height() == 1 {
            state.emit_all(candidates);
        } else {
            for (index, &word) in candidates.iter().enumerate() {
                if state.interrupted() {
                    break;
                }
                self.explore(&mut state, word);
                observer.on_branch(index + 1, candidates.len(), state.solutions.len());
            }
        }

        observer.on_finish(state.solutions.len());
        state.into_outcome(start.elapsed())
    }

    /// Find every solution, fanning row-0 branches out over the rayon pool
    ///
    /// Solutions are merged in candidate order, so the outcome lists the same
    /// stacks in the same order as [`Backtracker::solve_with_observer`],
    /// including when a solution limit cuts the search short.
    #[must_use]
    pub fn solve_parallel(&self, observer: &dyn SearchObserver) -> SearchOutcome {
        let start = Instant::now();
        let candidates = self.puzzle.candidates();

        observer.on_start(candidates.len());

        if self.puzzle.height() == 1 {
            let mut state = SearchState::new(self.limits, start);
            state.emit_all(candidates);
            observer.on_finish(state.solutions.len());
            return state.into_outcome(start.elapsed());
        }

        let done = AtomicUsize::new(0);
        let found = AtomicUsize::new(0);
        let branches: Vec<(Vec<RowStack>, Option<StopReason>)> = candidates
            .par_iter()
            .map(|&word| {
                // Each branch may find up to the cap; the merge below trims
                let mut state = SearchState::new(self.limits, start);
                self.explore(&mut state, word);
                let finished = done.fetch_add(1, Ordering::Relaxed) + 1;
                let branch_found = state.solutions.len();
                let total_found = found.fetch_add(branch_found, Ordering::Relaxed) + branch_found;
                observer.on_branch(finished, candidates.len(), total_found);
                (state.solutions, state.stopped)
            })
            .collect();

        let (solutions, stopped) = merge_branches(branches, self.limits.max_solutions);

        observer.on_finish(solutions.len());
        SearchOutcome {
            solutions,
            stopped,
            elapsed: start.elapsed(),
        }
    }

    /// Push `word`, search everything above it, pop it again
    fn explore(&self, state: &mut SearchState, word: Word) {
        state.stack.push(word);
        let options = extend(&state.stack, self.puzzle.targets(), self.table);
        self.descend(state, &options);
        state.stack.pop();
    }

    fn descend(&self, state: &mut SearchState, options: &[Word]) {
        if state.interrupted() {
            return;
        }

        if state.stack.len() + 1 == self.puzzle.height() {
            state.emit_all(options);
            return;
        }

        for &word in options {
            if state.interrupted() {
                return;
            }
            self.explore(state, word);
        }
    }
}

/// Concatenate per-branch results in candidate order, as a sequential search would
///
/// Stops at the first branch that timed out or that fills the solution cap.
/// A timeout wins unless the solutions found before it already overflow the cap.
fn merge_branches(
    branches: Vec<(Vec<RowStack>, Option<StopReason>)>,
    max_solutions: Option<usize>,
) -> (Vec<RowStack>, Option<StopReason>) {
    let mut solutions = Vec::new();

    for (branch, branch_stop) in branches {
        let room = max_solutions.map_or(usize::MAX, |max| max - solutions.len());

        if branch_stop == Some(StopReason::Timeout) && branch.len() <= room {
            solutions.extend(branch);
            return (solutions, Some(StopReason::Timeout));
        }
        if branch.len() >= room {
            solutions.extend(branch.into_iter().take(room));
            return (solutions, Some(StopReason::SolutionLimit));
        }
        solutions.extend(branch);
    }

    (solutions, None)
}

/// Mutable state of one depth-first search
struct SearchState {
    stack: Vec<Word>,
    solutions: Vec<RowStack>,
    max_solutions: Option<usize>,
    deadline: Option<Instant>,
    stopped: Option<StopReason>,
    steps: usize,
}

impl SearchState {
    fn new(limits: SearchLimits, start: Instant) -> Self {
        Self {
            stack: Vec::new(),
            solutions: Vec::new(),
            max_solutions: limits.max_solutions,
            deadline: limits.timeout.map(|timeout| start + timeout),
            stopped: None,
            steps: 0,
        }
    }

    /// Consulted at every step; polls the clock every `INTERRUPT_FREQUENCY` steps
    fn interrupted(&mut self) -> bool {
        if self.stopped.is_some() || self.reached_limit() {
            return true;
        }

        self.steps += 1;
        if self.steps % INTERRUPT_FREQUENCY == 0
            && let Some(deadline) = self.deadline
            && Instant::now() > deadline
        {
            self.stopped = Some(StopReason::Timeout);
        }

        self.stopped.is_some()
    }

    /// Marks the search stopped once the solution cap is filled
    fn reached_limit(&mut self) -> bool {
        if self.max_solutions.is_some_and(|max| self.solutions.len() >= max) {
            self.stopped = Some(StopReason::SolutionLimit);
            return true;
        }
        false
    }

    /// Complete the current stack with each option in turn
    fn emit_all(&mut self, options: &[Word]) {
        if self.reached_limit() {
            return;
        }
        for &word in options {
            let mut solution = Vec::with_capacity(self.stack.len() + 1);
            solution.extend_from_slice(&self.stack);
            solution.push(word);
            self.solutions.push(solution);

            if self.reached_limit() {
                return;
            }
        }
    }

    fn into_outcome(self, elapsed: Duration) -> SearchOutcome {
        SearchOutcome {
            solutions: self.solutions,
            stopped: self.stopped,
            elapsed,
        }
    }
}
