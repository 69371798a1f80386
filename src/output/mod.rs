//! Terminal output formatting
//!
//! Display utilities for CLI results, progress bars and pretty-printing.

pub mod display;
pub mod formatters;
pub mod progress;

pub use display::{print_colour_result, print_next_rows, print_solve_result, print_table_summary};
pub use progress::{SearchProgressBar, TableProgressBar};
