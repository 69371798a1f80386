//! Crosswordle solving algorithms
//!
//! The row extension filter decides which words may go on the next row; the
//! backtracker drives it depth-first until every stack reaches full height.

pub mod filter;
mod search;

pub use filter::{LetterCounts, LetterSet, RowContext, extend, is_sub_multiset};
pub use search::{
    Backtracker, INTERRUPT_FREQUENCY, NoSearchProgress, RowStack, SearchLimits, SearchObserver,
    SearchOutcome, StopReason,
};
