//! Word list loading utilities
//!
//! Word lists are plain text: words separated by commas and/or whitespace,
//! so both `"cigar, rebut, sissy"` and one-word-per-line files load the same.

use crate::core::Word;
use crate::error::CrosswordleError;
use std::fs;
use std::path::Path;

/// Parse a word list from text
///
/// Every entry must be a valid word; the first invalid one is reported.
///
/// # Errors
///
/// Returns `CrosswordleError::InvalidWord` naming the offending entry.
///
/// # Examples
/// ```
/// use crosswordle_solver::wordlists::loader::parse_word_list;
///
/// let words = parse_word_list("cigar, rebut,\nsissy").unwrap();
/// assert_eq!(words.len(), 3);
/// assert_eq!(words[2].as_str(), "sissy");
/// ```
pub fn parse_word_list(text: &str) -> Result<Vec<Word>, CrosswordleError> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            Word::new(entry).map_err(|source| CrosswordleError::InvalidWord {
                word: entry.to_string(),
                source,
            })
        })
        .collect()
}

/// Load words from a file
///
/// # Errors
///
/// Returns `CrosswordleError::ReadError` if the file cannot be read, or
/// `CrosswordleError::InvalidWord` if any entry is not a valid word.
///
/// # Examples
/// ```no_run
/// use crosswordle_solver::wordlists::loader::load_from_file;
///
/// let words = load_from_file("wordles.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, CrosswordleError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| CrosswordleError::ReadError {
        path: path.display().to_string(),
        source,
    })?;

    parse_word_list(&content)
}

/// Convert a string slice to a Word vector
///
/// # Errors
///
/// Returns `CrosswordleError::InvalidWord` for the first invalid entry.
pub fn words_from_slice(slice: &[&str]) -> Result<Vec<Word>, CrosswordleError> {
    slice
        .iter()
        .map(|&s| {
            Word::new(s).map_err(|source| CrosswordleError::InvalidWord {
                word: s.to_string(),
                source,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WordError;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let words = words_from_slice(&["crane", "slate", "irate"]).unwrap();

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].as_str(), "crane");
        assert_eq!(words[1].as_str(), "slate");
        assert_eq!(words[2].as_str(), "irate");
    }

    #[test]
    fn words_from_slice_rejects_invalid() {
        let result = words_from_slice(&["crane", "toolong", "slate"]);

        assert!(matches!(
            result,
            Err(CrosswordleError::InvalidWord { ref word, source: WordError::InvalidLength(7) })
                if word == "toolong"
        ));
    }

    #[test]
    fn parse_comma_separated() {
        let words = parse_word_list("cigar, rebut, sissy, humph").unwrap();
        let texts: Vec<&str> = words.iter().map(Word::as_str).collect();
        assert_eq!(texts, ["cigar", "rebut", "sissy", "humph"]);
    }

    #[test]
    fn parse_line_separated_keeps_order() {
        let words = parse_word_list("aback\r\nabase\n\nabate\n").unwrap();
        let texts: Vec<&str> = words.iter().map(Word::as_str).collect();
        assert_eq!(texts, ["aback", "abase", "abate"]);
    }

    #[test]
    fn parse_empty_text() {
        assert!(parse_word_list("  \n, ,").unwrap().is_empty());
    }

    #[test]
    fn parse_rejects_mismatched_length() {
        assert!(matches!(
            parse_word_list("cigar, rebuts"),
            Err(CrosswordleError::InvalidWord { .. })
        ));
    }

    #[test]
    fn load_missing_file_reports_path() {
        let err = load_from_file("/nonexistent/wordles.txt").unwrap_err();
        assert!(matches!(err, CrosswordleError::ReadError { ref path, .. } if path.contains("wordles.txt")));
    }
}
