use crate::{Config, Journal, JournalWriteEntry, JsonFileStore};
use std::path::PathBuf;
use tempfile::TempDir;

/// Test helper to create a default `Config` for testing purposes.
///
/// This is the single source of truth for test configuration.
/// If you add a field to `Config`, you only need to update it here.
pub fn mk_config(journal_file: PathBuf) -> Config {
    Config {
        journal_file,
        date_format: "%Y-%m-%d %H:%M:%S".to_string(),
    }
}

/// A journal backed by a JSON document inside a fresh temporary directory.
/// Keep the `TempDir` alive for as long as the journal is used.
pub fn mk_journal_with_default() -> (Journal<JsonFileStore>, TempDir) {
    let tmp = tempfile::tempdir().unwrap();
    let config = mk_config(tmp.path().join("journal.json"));
    let journal = Journal::with_config(&config).expect("journal with config");
    (journal, tmp)
}

pub fn write_entry(title: &str, content: &str) -> JournalWriteEntry {
    JournalWriteEntry {
        title: title.to_string(),
        content: content.to_string(),
        tags: Vec::new(),
    }
}
