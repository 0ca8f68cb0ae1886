//! The core `Journal` struct, providing the add, list and delete operations.
use super::format_utils::format_timestamp;
use super::journal_entry::{JournalEntry, JournalQueryResult, JournalWriteEntry};
use crate::config::Config;
use crate::store::{JournalStore, JsonFileStore, QueryError};
use anyhow::Result;
use chrono::Local;
use tracing::{debug, info};
use uuid::Uuid;

/// What happened to a `delete` request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted(JournalEntry),
    NotFound,
}

/// The central struct for all journal operations.
///
/// Each operation is a single transaction against the store: load the whole
/// collection, apply one change (or none), save the whole collection back.
#[derive(Debug)]
pub struct Journal<S: JournalStore = JsonFileStore> {
    pub store: S,
    pub date_format: String,
}

impl Journal<JsonFileStore> {
    /// Creates a new `Journal` backed by the storage document named in `config`.
    ///
    /// This also creates the document when it does not exist yet.
    pub fn with_config(config: &Config) -> Result<Self> {
        let store = JsonFileStore::open(&config.journal_file)?;
        Ok(Self::with_store(store, &config.date_format))
    }
}

impl<S: JournalStore> Journal<S> {
    pub fn with_store(store: S, date_format: &str) -> Self {
        Self {
            store,
            date_format: date_format.to_string(),
        }
    }

    /// Creates and saves a new entry, stamped with the current local time and a fresh id.
    ///
    /// Returns the stored [`JournalEntry`]. Fails only when the collection
    /// cannot be saved.
    pub fn add(&self, input: JournalWriteEntry) -> Result<JournalEntry> {
        let mut entries = self.load_for_update()?;

        let mut id = Uuid::new_v4().to_string();
        while entries.iter().any(|e| e.id == id) {
            id = Uuid::new_v4().to_string();
        }
        let entry = JournalEntry {
            title: input.title,
            content: input.content,
            date: format_timestamp(&Local::now(), &self.date_format)?,
            tags: input.tags,
            id,
        };

        entries.push(entry.clone());
        self.store.save(&entries)?;
        info!(id = %entry.id, "added entry");
        Ok(entry)
    }

    /// Reads all entries in insertion order.
    ///
    /// It is designed to be resilient, returning a [`JournalQueryResult`] that
    /// contains both the entries and any errors found while loading.
    pub fn list(&self) -> JournalQueryResult {
        let loaded = self.store.load();
        debug!(entries = loaded.entries.len(), "listing entries");
        JournalQueryResult {
            entries: loaded.entries,
            errors: loaded.errors,
        }
    }

    /// Removes the entry whose id matches `id` exactly.
    ///
    /// The collection is only written back when something was removed.
    pub fn delete(&self, id: &str) -> Result<DeleteOutcome> {
        let entries = self.load_for_update()?;
        let Some(position) = entries.iter().position(|e| e.id == id) else {
            debug!(id, "no entry to delete");
            return Ok(DeleteOutcome::NotFound);
        };

        let mut remaining = entries;
        let removed = remaining.remove(position);
        self.store.save(&remaining)?;
        info!(id, "deleted entry");
        Ok(DeleteOutcome::Deleted(removed))
    }

    /// Loads the collection that a mutation will write back.
    ///
    /// A corrupt document counts as empty, but a document that could not be
    /// read at all is an error: saving over it would destroy its entries.
    fn load_for_update(&self) -> Result<Vec<JournalEntry>> {
        let loaded = self.store.load();
        for error in loaded.errors {
            if let QueryError::FileError { path, error } = error {
                return Err(error.context(format!(
                    "{} could not be read, it was left untouched",
                    path.display()
                )));
            }
        }
        Ok(loaded.entries)
    }
}
