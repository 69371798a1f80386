//! Command implementations

pub mod colour;
pub mod next;
pub mod solve;
pub mod table;

pub use colour::{ColourResult, colour_words};
pub use next::{NextRows, next_rows};
pub use solve::{SolveConfig, SolveResult, solve_puzzle};
pub use table::{TableSource, load_or_build_table};
