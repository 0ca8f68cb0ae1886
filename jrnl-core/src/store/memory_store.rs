use super::store::{JournalStore, LoadResult};
use crate::journal::JournalEntry;
use anyhow::{Result, bail};
use std::cell::{Cell, RefCell};
use std::path::PathBuf;

/// Keeps the collection in memory. Useful for tests and embedding.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<Vec<JournalEntry>>,
    saves: Cell<usize>,
    fail_saves: Cell<bool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries(entries: Vec<JournalEntry>) -> Self {
        Self {
            entries: RefCell::new(entries),
            ..Default::default()
        }
    }

    /// How many times `save` succeeded.
    pub fn save_count(&self) -> usize {
        self.saves.get()
    }

    /// Makes every following `save` fail, as a full disk would.
    pub fn fail_saves(&self, fail: bool) {
        self.fail_saves.set(fail);
    }
}

impl JournalStore for MemoryStore {
    fn load(&self) -> LoadResult {
        LoadResult {
            entries: self.entries.borrow().clone(),
            errors: Vec::new(),
        }
    }

    fn save(&self, entries: &[JournalEntry]) -> Result<()> {
        if self.fail_saves.get() {
            bail!("memory store is read-only");
        }
        *self.entries.borrow_mut() = entries.to_vec();
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }

    fn location(&self) -> PathBuf {
        PathBuf::from(":memory:")
    }
}
