//! On-disk cache for the feedback table
//!
//! The table is bincoded as-is. A loaded table is indistinguishable from a
//! freshly built one, so nothing downstream cares which path produced it.

use super::FeedbackTable;
use crate::error::CrosswordleError;
use crate::wordlists::Lexicon;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Serialize the table to `path`
///
/// The table is written to a sibling `.partial` file first and renamed into
/// place, so an interrupted save never leaves a truncated cache behind.
///
/// # Errors
///
/// Returns `CrosswordleError::CacheIo` or `CrosswordleError::CacheFormat` if
/// the file cannot be written.
pub fn save_table<P: AsRef<Path>>(table: &FeedbackTable, path: P) -> Result<(), CrosswordleError> {
    let path = path.as_ref();
    let partial = partial_path(path);
    let io_error = |source| CrosswordleError::CacheIo {
        path: path.display().to_string(),
        source,
    };

    let file = File::create(&partial).map_err(io_error)?;
    let mut writer = BufWriter::new(file);
    let written = bincode::serialize_into(&mut writer, table)
        .map_err(|source| CrosswordleError::CacheFormat {
            path: path.display().to_string(),
            source,
        })
        .and_then(|()| writer.flush().map_err(io_error));

    if let Err(e) = written {
        // Best effort cleanup; the write error is reported
        let _ = fs::remove_file(&partial);
        return Err(e);
    }

    fs::rename(&partial, path).map_err(io_error)
}

/// Deserialize a table from `path`
///
/// # Errors
///
/// Returns `CrosswordleError::CacheIo` if the file cannot be opened, or
/// `CrosswordleError::CacheFormat` if its contents are not a bincoded table.
pub fn load_table<P: AsRef<Path>>(path: P) -> Result<FeedbackTable, CrosswordleError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| CrosswordleError::CacheIo {
        path: path.display().to_string(),
        source,
    })?;

    bincode::deserialize_from(BufReader::new(file)).map_err(|source| {
        CrosswordleError::CacheFormat {
            path: path.display().to_string(),
            source,
        }
    })
}

/// Load a cached table, rejecting one built from other word lists
///
/// # Errors
///
/// Same as [`load_table`], plus `CrosswordleError::StaleCache` when the
/// cached pools differ from `lexicon` in size, content or order.
pub fn load_for_lexicon<P: AsRef<Path>>(
    path: P,
    lexicon: &Lexicon,
) -> Result<FeedbackTable, CrosswordleError> {
    let path = path.as_ref();
    let table = load_table(path)?;

    if !table.matches_lexicon(lexicon) {
        return Err(CrosswordleError::StaleCache {
            path: path.display().to_string(),
            cached_solutions: table.solution_count(),
            cached_guesses: table.guess_count(),
            solutions: lexicon.solutions().len(),
            guesses: lexicon.guesses().len(),
        });
    }

    Ok(table)
}

fn partial_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".partial");
    path.with_file_name(name)
}
