//! Parsing puzzle input
//!
//! Two forms are understood:
//! - a plain colouring list, bottom row first: `"242,74,20,99,9,0"` (codes or
//!   `G/Y/-` patterns);
//! - a shared puzzle code `v2-<colours>-<pins>`, optionally inside a URL as
//!   `?puzzle=<code>`. Colours are listed top row first. Pins hold one entry
//!   per row (also top first): `x` for none, otherwise `<position><letter>`
//!   pairs such as `2x` or `0s4e`.

use super::Puzzle;
use crate::core::{Colouring, WORD_LEN, Word};
use crate::error::CrosswordleError;
use std::str::FromStr;

const CODE_VERSION: &str = "v2";

/// A letter fixed at a position of a row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pin {
    pub position: usize,
    pub letter: u8,
}

impl Pin {
    #[must_use]
    pub fn matches(self, word: &Word) -> bool {
        word.letter_at(self.position) == self.letter
    }
}

/// Parse a bottom-first list of colourings separated by commas or whitespace
///
/// # Errors
///
/// Returns an error if any entry is not a valid colouring, or the list is empty.
///
/// # Examples
/// ```
/// use crosswordle_solver::puzzle::parse_colourings;
///
/// let targets = parse_colourings("242, GG-G-, 20").unwrap();
/// assert_eq!(targets.len(), 3);
/// assert!(targets[0].is_all_green());
/// ```
pub fn parse_colourings(text: &str) -> Result<Vec<Colouring>, CrosswordleError> {
    let targets = text
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|entry| !entry.is_empty())
        .map(Colouring::from_str)
        .collect::<Result<Vec<_>, _>>()?;

    if targets.is_empty() {
        return Err(CrosswordleError::EmptyPuzzle);
    }
    Ok(targets)
}

/// A decoded shared puzzle code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleCode {
    targets: Vec<Colouring>,
    pins: Vec<Vec<Pin>>,
}

impl PuzzleCode {
    /// Parse a `v2-...` code or a URL containing `puzzle=v2-...`
    ///
    /// # Errors
    ///
    /// Returns `CrosswordleError::InvalidPuzzle` describing the first problem found.
    pub fn parse(input: &str) -> Result<Self, CrosswordleError> {
        let invalid = |reason: String| CrosswordleError::InvalidPuzzle {
            input: input.to_string(),
            reason,
        };

        let code = extract_code(input.trim());
        let mut sections = code.split('-');

        match sections.next() {
            Some(CODE_VERSION) => {}
            other => {
                return Err(invalid(format!(
                    "expected version \"{CODE_VERSION}\", found \"{}\"",
                    other.unwrap_or_default()
                )));
            }
        }

        let colours = sections
            .next()
            .ok_or_else(|| invalid("missing colour section".to_string()))?;
        let mut targets = colours
            .split(',')
            .map(|entry| {
                entry
                    .parse::<u32>()
                    .map_err(|_| invalid(format!("colour \"{entry}\" is not a number")))
                    .and_then(|code| Colouring::new(code).map_err(|e| invalid(e.to_string())))
            })
            .collect::<Result<Vec<_>, _>>()?;
        targets.reverse();

        let mut pins = match sections.next() {
            Some(section) => section
                .split(',')
                .map(|entry| parse_pins(entry).map_err(&invalid))
                .collect::<Result<Vec<_>, _>>()?,
            None => vec![Vec::new(); targets.len()],
        };
        pins.reverse();

        if sections.next().is_some() {
            return Err(invalid("unexpected trailing section".to_string()));
        }
        if pins.len() != targets.len() {
            return Err(invalid(format!(
                "{} colour rows but {} pin rows",
                targets.len(),
                pins.len()
            )));
        }

        Ok(Self { targets, pins })
    }

    /// Target colourings, bottom row first
    #[must_use]
    pub fn targets(&self) -> &[Colouring] {
        &self.targets
    }

    /// Letters pinned on the bottom row
    #[must_use]
    pub fn bottom_pins(&self) -> &[Pin] {
        self.pins.first().map_or(&[], Vec::as_slice)
    }

    /// Number of pins on rows above the bottom one
    #[must_use]
    pub fn upper_pin_count(&self) -> usize {
        self.pins.iter().skip(1).map(Vec::len).sum()
    }

    /// Words from `pool` satisfying every bottom-row pin, in pool order
    #[must_use]
    pub fn bottom_candidates(&self, pool: &[Word]) -> Vec<Word> {
        pool.iter()
            .copied()
            .filter(|word| self.bottom_pins().iter().all(|pin| pin.matches(word)))
            .collect()
    }

    /// Build a puzzle whose bottom row is drawn from `pool`
    ///
    /// # Errors
    ///
    /// Returns `CrosswordleError::EmptyPuzzle` if the code had no rows.
    pub fn into_puzzle(self, pool: &[Word]) -> Result<Puzzle, CrosswordleError> {
        let candidates = self.bottom_candidates(pool);
        Puzzle::new(self.targets, candidates)
    }
}

impl FromStr for PuzzleCode {
    type Err = CrosswordleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Pull the code out of a URL query, or return the input unchanged
fn extract_code(input: &str) -> &str {
    match input.split_once("puzzle=") {
        Some((_, rest)) => rest.split(['&', '#']).next().unwrap_or(rest),
        None => input,
    }
}

fn parse_pins(entry: &str) -> Result<Vec<Pin>, String> {
    if entry.is_empty() || entry == "x" {
        return Ok(Vec::new());
    }

    let bytes = entry.as_bytes();
    if bytes.len() % 2 != 0 {
        return Err(format!("pin entry \"{entry}\" is not position/letter pairs"));
    }

    bytes
        .chunks_exact(2)
        .map(|pair| {
            let (digit, letter) = (pair[0], pair[1]);
            let position = usize::from(digit.wrapping_sub(b'0'));
            if !digit.is_ascii_digit() || position >= WORD_LEN {
                return Err(format!("bad pin position in \"{entry}\""));
            }
            if !letter.is_ascii_alphabetic() {
                return Err(format!("bad pin letter in \"{entry}\""));
            }
            Ok(Pin {
                position,
                letter: letter.to_ascii_lowercase(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    const SHARED: &str = "v2-0,9,99,20,20,242-x,x,x,x,x,2x";

    #[test]
    fn parse_colour_list_bottom_first() {
        let targets = parse_colourings("242,74,20,99,9,0").unwrap();
        let codes: Vec<u8> = targets.iter().map(|c| c.code()).collect();
        assert_eq!(codes, [242, 74, 20, 99, 9, 0]);
    }

    #[test]
    fn parse_colour_list_mixed_forms() {
        let targets = parse_colourings("GGGGG -G-G-\n20").unwrap();
        assert_eq!(targets[0], Colouring::ALL_GREEN);
        assert_eq!(targets[1].code(), 60);
        assert_eq!(targets[2].code(), 20);
    }

    #[test]
    fn parse_colour_list_errors() {
        assert!(matches!(parse_colourings(" , "), Err(CrosswordleError::EmptyPuzzle)));
        assert!(matches!(
            parse_colourings("242,300"),
            Err(CrosswordleError::ColouringOutOfRange(300))
        ));
        assert!(matches!(
            parse_colourings("242,GGQGG"),
            Err(CrosswordleError::InvalidColouring(_))
        ));
    }

    #[test]
    fn parse_shared_code() {
        let code = PuzzleCode::parse(SHARED).unwrap();
        let codes: Vec<u8> = code.targets().iter().map(|c| c.code()).collect();
        assert_eq!(codes, [242, 20, 20, 99, 9, 0]);
        assert_eq!(
            code.bottom_pins(),
            &[Pin {
                position: 2,
                letter: b'x'
            }]
        );
        assert_eq!(code.upper_pin_count(), 0);
    }

    #[test]
    fn parse_shared_url() {
        let url = format!("https://crosswordle.vercel.app/?puzzle={SHARED}&ref=share");
        let from_url: PuzzleCode = url.parse().unwrap();
        assert_eq!(from_url, PuzzleCode::parse(SHARED).unwrap());
    }

    #[test]
    fn parse_code_without_pins() {
        let code = PuzzleCode::parse("v2-9,242").unwrap();
        assert_eq!(code.targets().len(), 2);
        assert!(code.bottom_pins().is_empty());
    }

    #[test]
    fn parse_multiple_pins_per_row() {
        let code = PuzzleCode::parse("v2-0,242-1a,0s4e").unwrap();
        assert_eq!(code.bottom_pins().len(), 2);
        assert_eq!(code.upper_pin_count(), 1);
    }

    #[test]
    fn parse_code_errors() {
        for bad in [
            "v1-0,242",
            "v2",
            "v2-0,abc",
            "v2-0,243",
            "v2-0,242-x",
            "v2-0,242-x,9x",
            "v2-0,242-x,2",
            "v2-0,242-x,x-extra",
        ] {
            assert!(
                matches!(PuzzleCode::parse(bad), Err(CrosswordleError::InvalidPuzzle { .. })),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn bottom_candidates_follow_pins_in_pool_order() {
        let pool = words_from_slice(&["boxer", "crane", "toxic", "exact"]).unwrap();
        let code = PuzzleCode::parse(SHARED).unwrap();

        let candidates = code.bottom_candidates(&pool);
        let texts: Vec<&str> = candidates.iter().map(Word::as_str).collect();
        assert_eq!(texts, ["boxer", "toxic"]);

        let puzzle = code.into_puzzle(&pool).unwrap();
        assert_eq!(puzzle.height(), 6);
        assert_eq!(puzzle.candidates().len(), 2);
    }
}
