//! Crosswordle feedback colouring calculation and representation
//!
//! A colouring holds one tile per letter position:
//! - 0 = Grey (letter not available in the solution)
//! - 1 = Yellow (letter in the solution, wrong position)
//! - 2 = Green (letter in correct position)
//!
//! Colourings are stored as a single base-3 number (0-242) with the
//! **first** tile as the most significant digit, so `[G, G, G, G, G]` is 242
//! and `[-, -, Y, -, -]` is 9.

use super::word::{ALPHABET_LEN, WORD_LEN, Word, alphabet_index};
use crate::error::CrosswordleError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of distinct colourings (3^5)
pub const COLOURING_COUNT: u32 = 243;

/// A single feedback tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    Grey = 0,
    Yellow = 1,
    Green = 2,
}

impl Tile {
    /// Base-3 digit of this tile
    #[inline]
    #[must_use]
    pub const fn digit(self) -> u8 {
        self as u8
    }

    /// Tile for a base-3 digit, if the digit is in range
    #[must_use]
    pub const fn from_digit(digit: u8) -> Option<Self> {
        match digit {
            0 => Some(Self::Grey),
            1 => Some(Self::Yellow),
            2 => Some(Self::Green),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_grey(self) -> bool {
        matches!(self, Self::Grey)
    }

    /// Emoji square used in shared results
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Green => '🟩',
            Self::Yellow => '🟨',
            Self::Grey => '⬜',
        }
    }
}

/// Compute the tiles shown when `guess` is played against `solution`
///
/// Two passes, matching real Wordle duplicate-letter rules:
/// 1. Exact positional matches turn green; every unmatched solution letter
///    goes into an "observed" multiset.
/// 2. Left to right, each non-green guess letter still in the multiset turns
///    yellow and consumes one occurrence; everything else stays grey.
///
/// # Examples
/// ```
/// use crosswordle_solver::core::Tile::{Green as G, Grey as X, Yellow as Y};
/// use crosswordle_solver::core::{Word, colour};
///
/// let guess = Word::new("crane").unwrap();
/// let solution = Word::new("trace").unwrap();
///
/// assert_eq!(colour(&guess, &solution), [Y, G, G, X, G]);
/// ```
#[must_use]
pub fn colour(guess: &Word, solution: &Word) -> [Tile; WORD_LEN] {
    let mut tiles = [Tile::Grey; WORD_LEN];
    let mut observed = [0u8; ALPHABET_LEN];

    // First pass: greens, and the multiset of unmatched solution letters
    for (pos, (&g, &s)) in guess.letters().iter().zip(solution.letters()).enumerate() {
        if g == s {
            tiles[pos] = Tile::Green;
        } else {
            observed[alphabet_index(s)] += 1;
        }
    }

    // Second pass: yellows consume the observed multiset, leftmost first
    for (tile, &g) in tiles.iter_mut().zip(guess.letters()) {
        if *tile == Tile::Green {
            continue;
        }
        let remaining = &mut observed[alphabet_index(g)];
        if *remaining > 0 {
            *remaining -= 1;
            *tile = Tile::Yellow;
        }
    }

    tiles
}

/// Encode tiles as a base-3 number, first tile most significant
#[must_use]
pub fn encode(tiles: &[Tile; WORD_LEN]) -> u8 {
    tiles.iter().fold(0u8, |acc, tile| acc * 3 + tile.digit())
}

/// Decode a base-3 number back into tiles, zero-padded on the left
///
/// # Errors
/// Returns `CrosswordleError::ColouringOutOfRange` if `code >= 243`.
pub fn decode(code: u32) -> Result<[Tile; WORD_LEN], CrosswordleError> {
    if code >= COLOURING_COUNT {
        return Err(CrosswordleError::ColouringOutOfRange(code));
    }

    let mut tiles = [Tile::Grey; WORD_LEN];
    let mut rest = code;
    for tile in tiles.iter_mut().rev() {
        // rest % 3 is always a valid digit
        *tile = Tile::from_digit((rest % 3) as u8).unwrap_or(Tile::Grey);
        rest /= 3;
    }

    Ok(tiles)
}

/// Feedback colouring for one row
///
/// Represents the tiles as a single byte value in the range 0-242.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Colouring(u8);

impl Colouring {
    /// All greens (the solution itself)
    pub const ALL_GREEN: Self = Self(242);

    /// All greys
    pub const ALL_GREY: Self = Self(0);

    /// Create a colouring from its base-3 code
    ///
    /// # Errors
    /// Returns `CrosswordleError::ColouringOutOfRange` if `code >= 243`.
    pub fn new(code: u32) -> Result<Self, CrosswordleError> {
        decode(code).map(|tiles| Self::from_tiles(&tiles))
    }

    /// Get the raw base-3 code (0-242)
    #[inline]
    #[must_use]
    pub const fn code(self) -> u8 {
        self.0
    }

    #[must_use]
    pub fn from_tiles(tiles: &[Tile; WORD_LEN]) -> Self {
        Self(encode(tiles))
    }

    /// Expand into one tile per position
    #[must_use]
    pub fn tiles(self) -> [Tile; WORD_LEN] {
        // self.0 < 243 by construction
        decode(u32::from(self.0)).unwrap_or([Tile::Grey; WORD_LEN])
    }

    /// Tile at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[must_use]
    pub fn tile(self, position: usize) -> Tile {
        self.tiles()[position]
    }

    /// Calculate the colouring when `guess` is played against `solution`
    ///
    /// # Examples
    /// ```
    /// use crosswordle_solver::core::{Colouring, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let solution = Word::new("slate").unwrap();
    ///
    /// // C(grey) R(grey) A(green) N(grey) E(green)
    /// // 0×81 + 0×27 + 2×9 + 0×3 + 2 = 20
    /// assert_eq!(Colouring::calculate(&guess, &solution).code(), 20);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, solution: &Word) -> Self {
        Self::from_tiles(&colour(guess, solution))
    }

    #[inline]
    #[must_use]
    pub const fn is_all_green(self) -> bool {
        self.0 == Self::ALL_GREEN.0
    }

    #[must_use]
    pub fn count_greens(self) -> usize {
        self.tiles().iter().filter(|&&t| t == Tile::Green).count()
    }

    #[must_use]
    pub fn count_yellows(self) -> usize {
        self.tiles().iter().filter(|&&t| t == Tile::Yellow).count()
    }

    /// Parse a colouring pattern like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for green
    /// - 'Y'/'y'/🟨 for yellow
    /// - '-'/'_'/'.'/⬜/⬛ for grey
    #[must_use]
    pub fn from_pattern(s: &str) -> Option<Self> {
        let mut tiles = [Tile::Grey; WORD_LEN];
        let mut count = 0;

        for ch in s.chars() {
            let tile = match ch {
                'G' | 'g' | '🟩' => Tile::Green,
                'Y' | 'y' | '🟨' => Tile::Yellow,
                '-' | '_' | '.' | '⬜' | '⬛' => Tile::Grey,
                _ => return None,
            };
            *tiles.get_mut(count)? = tile;
            count += 1;
        }

        (count == WORD_LEN).then(|| Self::from_tiles(&tiles))
    }

    /// Convert to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.tiles().iter().map(|t| t.emoji()).collect()
    }
}

impl FromStr for Colouring {
    type Err = CrosswordleError;

    /// Accepts either a base-3 code ("155") or a pattern ("YGG-G")
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(code) = s.parse::<u32>() {
            return Self::new(code);
        }
        Self::from_pattern(s).ok_or_else(|| CrosswordleError::InvalidColouring(s.to_string()))
    }
}

impl fmt::Display for Colouring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for tile in self.tiles() {
            let ch = match tile {
                Tile::Green => 'G',
                Tile::Yellow => 'Y',
                Tile::Grey => '-',
            };
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}
