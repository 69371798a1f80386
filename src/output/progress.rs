//! Progress bars for table building and searching

use crate::solver::SearchObserver;
use crate::table::BuildProgress;
use indicatif::{ProgressBar, ProgressStyle};

const TEMPLATE: &str = "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}";

fn styled_bar() -> ProgressBar {
    let pb = ProgressBar::hidden();
    pb.set_style(
        ProgressStyle::default_bar()
            .template(TEMPLATE)
            .map_or_else(|_| ProgressStyle::default_bar(), |style| style)
            .progress_chars("█▓▒░"),
    );
    pb
}

/// Progress bar advanced once per solution while the table is built
pub struct TableProgressBar {
    pb: ProgressBar,
}

impl TableProgressBar {
    #[must_use]
    pub fn new() -> Self {
        Self { pb: styled_bar() }
    }
}

impl Default for TableProgressBar {
    fn default() -> Self {
        Self::new()
    }
}

impl BuildProgress for TableProgressBar {
    fn on_start(&self, solutions: usize) {
        self.pb.set_draw_target(indicatif::ProgressDrawTarget::stderr());
        self.pb.set_length(solutions as u64);
        self.pb.set_message("colouring guesses");
    }

    fn on_solution(&self) {
        self.pb.inc(1);
    }

    fn on_finish(&self, buckets: usize) {
        self.pb.finish_with_message(format!("{buckets} buckets"));
    }
}

/// Progress bar advanced once per finished row-0 branch
pub struct SearchProgressBar {
    pb: ProgressBar,
}

impl SearchProgressBar {
    #[must_use]
    pub fn new() -> Self {
        Self { pb: styled_bar() }
    }
}

impl Default for SearchProgressBar {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchObserver for SearchProgressBar {
    fn on_start(&self, candidates: usize) {
        self.pb.set_draw_target(indicatif::ProgressDrawTarget::stderr());
        self.pb.set_length(candidates as u64);
        self.pb.set_message("searching");
    }

    fn on_branch(&self, done: usize, _total: usize, found: usize) {
        self.pb.set_position(done as u64);
        self.pb.set_message(format!("{found} found"));
    }

    fn on_finish(&self, found: usize) {
        self.pb.finish_with_message(format!("{found} solutions"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_progress_counts_solutions() {
        let progress = TableProgressBar::new();
        progress.pb.set_length(3);
        progress.on_solution();
        progress.on_solution();
        assert_eq!(progress.pb.position(), 2);
    }

    #[test]
    fn search_progress_tracks_branches() {
        let progress = SearchProgressBar::new();
        progress.pb.set_length(4);
        progress.on_branch(3, 4, 7);
        assert_eq!(progress.pb.position(), 3);
        progress.on_finish(7);
        assert!(progress.pb.is_finished());
    }
}
