//! Crosswordle word representation
//!
//! A Word stores a 5-letter lowercase word inline, so it can be copied freely
//! into feedback table buckets and row stacks.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of letters in every word (and tiles in every colouring)
pub const WORD_LEN: usize = 5;

/// Number of letters in the alphabet words are drawn from
pub const ALPHABET_LEN: usize = 26;

/// A 5-letter Crosswordle word
///
/// Always lowercase ASCII; validated once in [`Word::new`] and immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Word([u8; WORD_LEN]);

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Word must be exactly {WORD_LEN} letters, got {len}")
            }
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use crosswordle_solver::core::Word;
    ///
    /// let word = Word::new("TRACE").unwrap();
    /// assert_eq!(word.as_str(), "trace");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, WordError> {
        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if text.len() != WORD_LEN {
            return Err(WordError::InvalidLength(text.len()));
        }

        let mut letters = [0u8; WORD_LEN];
        for (slot, byte) in letters.iter_mut().zip(text.bytes()) {
            if !byte.is_ascii_alphabetic() {
                return Err(WordError::InvalidCharacters);
            }
            *slot = byte.to_ascii_lowercase();
        }

        Ok(Self(letters))
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[u8; WORD_LEN] {
        &self.0
    }

    /// Get the letter at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn letter_at(&self, position: usize) -> u8 {
        self.0[position]
    }

    /// Get the word as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        // Letters are validated ASCII, so this never falls back
        std::str::from_utf8(&self.0).unwrap_or_default()
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.0.contains(&letter)
    }
}

/// Index of a lowercase letter within the alphabet
#[inline]
pub(crate) fn alphabet_index(letter: u8) -> usize {
    usize::from(letter - b'a')
}

impl FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.trim())
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
