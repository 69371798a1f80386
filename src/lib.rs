//! Crosswordle Solver
//!
//! Finds every stack of words that reproduces a Crosswordle grid: a bottom-row
//! solution word and, above it, guesses whose Wordle colourings against that
//! solution match the puzzle row by row.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use crosswordle_solver::core::{Colouring, Word};
//! use crosswordle_solver::puzzle::Puzzle;
//! use crosswordle_solver::solver::Backtracker;
//! use crosswordle_solver::table::FeedbackTable;
//! use crosswordle_solver::wordlists::Lexicon;
//!
//! let lexicon = Lexicon::from_files("wordles.txt", "extendedwordles.txt").unwrap();
//! let table = FeedbackTable::build(&lexicon).unwrap();
//!
//! let targets = vec![Colouring::ALL_GREEN, "-GGGG".parse().unwrap()];
//! let puzzle = Puzzle::new(targets, lexicon.solutions().to_vec()).unwrap();
//!
//! for stack in Backtracker::new(&table, &puzzle).solve().solutions {
//!     let words: Vec<&str> = stack.iter().map(Word::as_str).collect();
//!     println!("{}", words.join(" "));
//! }
//! ```

// Core domain types
pub mod core;

// Error type shared across the crate
pub mod error;

// Word lists
pub mod wordlists;

// Precomputed (solution, colouring) -> guesses table
pub mod table;

// Puzzle input and codes
pub mod puzzle;

// Solving algorithms
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub use error::CrosswordleError;
