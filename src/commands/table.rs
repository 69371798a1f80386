//! Feedback table acquisition
//!
//! Prefers a cached table; falls back to building one when the cache is
//! missing, unreadable or stale.

use crate::error::CrosswordleError;
use crate::table::{BuildProgress, FeedbackTable, cache};
use crate::wordlists::Lexicon;
use std::path::{Path, PathBuf};

/// Where a table came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableSource {
    /// Loaded from this cache file
    Cache(PathBuf),
    /// Built from the word lists; `reason` says why a cache was not used
    Built { reason: Option<String> },
}

impl TableSource {
    #[must_use]
    pub const fn was_built(&self) -> bool {
        matches!(self, Self::Built { .. })
    }
}

/// Load the table cached at `cache_path`, or build it for `lexicon`
///
/// # Errors
///
/// Returns an error only if building fails; cache problems fall back to building.
pub fn load_or_build_table(
    lexicon: &Lexicon,
    cache_path: Option<&Path>,
    progress: &dyn BuildProgress,
) -> Result<(FeedbackTable, TableSource), CrosswordleError> {
    let reason = match cache_path {
        Some(path) if path.exists() => match cache::load_for_lexicon(path, lexicon) {
            Ok(table) => return Ok((table, TableSource::Cache(path.to_path_buf()))),
            Err(e) => Some(e.to_string()),
        },
        Some(_) | None => None,
    };

    let table = FeedbackTable::build_with_progress(lexicon, progress)?;
    Ok((table, TableSource::Built { reason }))
}
