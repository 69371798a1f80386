//! Core domain types for Crosswordle
//!
//! Words, tiles and colourings. Everything here is pure: no I/O, no shared state.

mod colouring;
mod word;

pub use colouring::{COLOURING_COUNT, Colouring, Tile, colour, decode, encode};
pub use word::{ALPHABET_LEN, WORD_LEN, Word, WordError};
