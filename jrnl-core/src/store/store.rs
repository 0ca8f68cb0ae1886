use crate::journal::JournalEntry;
use anyhow::Result;
use std::path::PathBuf;

/// Represents a non-critical issue that occurred while loading the journal.
///
/// Loading never fails: problems are reported next to whatever entries could
/// be recovered, and the caller decides how to show them.
#[derive(Debug)]
pub enum QueryError {
    /// The storage document could not be read at all.
    FileError { path: PathBuf, error: anyhow::Error },
    /// The storage document is not a JSON array of records. Nothing was recovered.
    Corrupt { path: PathBuf, error: String },
    /// A single record was skipped or repaired.
    InvalidRecord { path: PathBuf, error: String },
}

/// Entries recovered from storage and any errors found on the way.
#[derive(Debug)]
pub struct LoadResult {
    pub entries: Vec<JournalEntry>,
    pub errors: Vec<QueryError>,
}

/// Owner of the serialized collection.
///
/// Every operation reads and writes the whole collection; there is no
/// partial or incremental access.
pub trait JournalStore {
    /// Reads the full collection.
    fn load(&self) -> LoadResult;

    /// Replaces the stored collection with `entries`.
    fn save(&self, entries: &[JournalEntry]) -> Result<()>;

    /// Where the collection lives, for display purposes.
    fn location(&self) -> PathBuf;
}
