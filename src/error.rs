//! Error type shared by the library modules

use crate::core::WordError;
use thiserror::Error;

#[derive(Error, Debug)]
/// Errors that can be returned
pub enum CrosswordleError {
    /// A word list entry or command-line word is not a valid word
    #[error("Invalid word \"{word}\": {source}")]
    InvalidWord { word: String, source: WordError },

    /// Colouring codes live in 0..243
    #[error("Colouring code {0} is out of range (expected 0-242)")]
    ColouringOutOfRange(u32),

    /// Neither a base-3 code nor a G/Y/- pattern
    #[error("Invalid colouring \"{0}\"")]
    InvalidColouring(String),

    /// Both the solution and guess lists must contain words
    #[error("The {0} word list is empty")]
    EmptyLexicon(&'static str),

    /// A puzzle needs at least one row
    #[error("Puzzle has no rows")]
    EmptyPuzzle,

    /// Error parsing a shared puzzle code
    #[error("Invalid puzzle \"{input}\": {reason}")]
    InvalidPuzzle { input: String, reason: String },

    /// The feedback table could not be allocated
    #[error("Feedback table with {entries} buckets does not fit in memory")]
    TableTooLarge { entries: usize },

    /// Error reading a word list
    #[error("Word list \"{path}\" could not be read")]
    ReadError {
        path: String,
        source: std::io::Error,
    },

    /// Error opening or writing a table cache
    #[error("Table cache \"{path}\" could not be accessed")]
    CacheIo {
        path: String,
        source: std::io::Error,
    },

    /// Error (de)serializing a bincoded table cache
    #[error("Table cache \"{path}\" could not be (de)serialized")]
    CacheFormat {
        path: String,
        source: bincode::Error,
    },

    /// The cached table was built from different word lists, even if equally sized
    #[error(
        "Table cache \"{path}\" was built from different word lists \
         ({cached_solutions}x{cached_guesses} words, now {solutions}x{guesses})"
    )]
    StaleCache {
        path: String,
        cached_solutions: usize,
        cached_guesses: usize,
        solutions: usize,
        guesses: usize,
    },
}
