//! The storage document: a single JSON array of entries on disk.
use super::store::{JournalStore, LoadResult, QueryError};
use crate::journal::{JournalEntry, parse_stored_entries};
use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::{Serializer, Value, ser::PrettyFormatter};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Opens the storage document at `path`, creating it (and its parent
    /// directories) when it does not exist yet.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating parent directory {}", parent.display()))?;
            }
        }
        if !path.exists() {
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("creating {}", path.display()))?;
            debug!(path = %path.display(), "created empty journal document");
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parent_dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }
}

impl JournalStore for JsonFileStore {
    fn load(&self) -> LoadResult {
        let mut errors = Vec::new();

        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(error) => {
                warn!(path = %self.path.display(), %error, "could not read journal document");
                errors.push(QueryError::FileError {
                    path: self.path.clone(),
                    error: anyhow::Error::new(error)
                        .context(format!("reading {}", self.path.display())),
                });
                return LoadResult {
                    entries: Vec::new(),
                    errors,
                };
            }
        };

        // A freshly touched document has no content yet.
        if content.trim().is_empty() {
            return LoadResult {
                entries: Vec::new(),
                errors,
            };
        }

        let records = match serde_json::from_str::<Value>(&content) {
            Ok(Value::Array(records)) => records,
            Ok(_) => {
                warn!(path = %self.path.display(), "journal document is not a JSON array, treating as empty");
                errors.push(QueryError::Corrupt {
                    path: self.path.clone(),
                    error: "expected a JSON array of entries at the top level".to_string(),
                });
                return LoadResult {
                    entries: Vec::new(),
                    errors,
                };
            }
            Err(error) => {
                warn!(path = %self.path.display(), %error, "journal document is not valid JSON, treating as empty");
                errors.push(QueryError::Corrupt {
                    path: self.path.clone(),
                    error: error.to_string(),
                });
                return LoadResult {
                    entries: Vec::new(),
                    errors,
                };
            }
        };

        let parse_result = parse_stored_entries(records);
        for error in parse_result.errors {
            warn!(path = %self.path.display(), "{error}");
            errors.push(QueryError::InvalidRecord {
                path: self.path.clone(),
                error,
            });
        }
        debug!(
            path = %self.path.display(),
            entries = parse_result.entries.len(),
            "loaded journal"
        );

        LoadResult {
            entries: parse_result.entries,
            errors,
        }
    }

    fn save(&self, entries: &[JournalEntry]) -> Result<()> {
        let mut buffer = Vec::new();
        let mut serializer =
            Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(b"    "));
        entries
            .serialize(&mut serializer)
            .context("serializing journal entries")?;

        // Write next to the document and rename over it, so readers only ever
        // see the old or the new collection.
        let mut file = tempfile::Builder::new()
            .prefix(".journal")
            .suffix(".tmp")
            .tempfile_in(self.parent_dir())
            .with_context(|| format!("creating temporary file for {}", self.path.display()))?;
        file.write_all(&buffer)
            .with_context(|| format!("writing entries for {}", self.path.display()))?;
        file.flush()
            .with_context(|| format!("flushing entries for {}", self.path.display()))?;
        file.persist(&self.path)
            .with_context(|| format!("replacing {}", self.path.display()))?;

        debug!(path = %self.path.display(), entries = entries.len(), "saved journal");
        Ok(())
    }

    fn location(&self) -> PathBuf {
        self.path.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn entry(title: &str, id: &str) -> JournalEntry {
        JournalEntry {
            title: title.to_string(),
            content: format!("{title} content"),
            date: "2025-08-15 21:00:00".to_string(),
            tags: vec!["one".to_string(), "two".to_string()],
            id: id.to_string(),
        }
    }

    #[test]
    fn open_touches_missing_document() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("nested/dir/journal.json");

        let store = JsonFileStore::open(&path).unwrap();

        assert!(path.exists());
        assert_eq!(store.path(), path.as_path());
        let result = store.load();
        assert!(result.entries.is_empty());
        assert!(result.errors.is_empty());
    }

    #[test]
    fn open_keeps_existing_document() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("journal.json");
        fs::write(&path, r#"[{"title": "Kept"}]"#).unwrap();

        let store = JsonFileStore::open(&path).unwrap();

        assert_eq!(store.load().entries[0].title, "Kept");
    }

    #[test]
    fn save_then_load_round_trips() {
        let tmp = tempdir().unwrap();
        let store = JsonFileStore::open(tmp.path().join("journal.json")).unwrap();
        let entries = vec![entry("First", "id-1"), entry("Second", "id-2")];

        store.save(&entries).unwrap();
        let result = store.load();

        assert!(result.errors.is_empty());
        assert_eq!(result.entries, entries);
    }

    #[test]
    fn save_writes_indented_array_with_uuid_key() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("journal.json");
        let store = JsonFileStore::open(&path).unwrap();

        store.save(&[entry("First", "id-1")]).unwrap();

        let s = fs::read_to_string(&path).unwrap();
        assert!(s.starts_with("[\n    {\n        \"title\": \"First\""));
        assert!(s.contains("\"uuid\": \"id-1\""));
        assert!(!s.contains("\"id\""));
    }

    #[test]
    fn save_leaves_no_temporary_files() {
        let tmp = tempdir().unwrap();
        let store = JsonFileStore::open(tmp.path().join("journal.json")).unwrap();

        store.save(&[entry("First", "id-1")]).unwrap();

        let names: Vec<_> = fs::read_dir(tmp.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(names, vec!["journal.json"]);
    }

    #[test]
    fn save_fails_when_directory_is_gone() {
        let tmp = tempdir().unwrap();
        let dir = tmp.path().join("gone");
        let store = JsonFileStore::open(dir.join("journal.json")).unwrap();
        fs::remove_dir_all(&dir).unwrap();

        assert!(store.save(&[entry("First", "id-1")]).is_err());
    }

    #[test]
    fn invalid_json_loads_as_empty_with_error() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("journal.json");
        fs::write(&path, "[{\"title\": ").unwrap();
        let store = JsonFileStore::open(&path).unwrap();

        let result = store.load();

        assert!(result.entries.is_empty());
        assert_eq!(result.errors.len(), 1);
        assert!(matches!(&result.errors[0], QueryError::Corrupt { .. }));
    }

    #[test]
    fn non_array_document_loads_as_empty_with_error() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("journal.json");
        fs::write(&path, r#"{"title": "not in a list"}"#).unwrap();
        let store = JsonFileStore::open(&path).unwrap();

        let result = store.load();

        assert!(result.entries.is_empty());
        assert!(matches!(&result.errors[0], QueryError::Corrupt { .. }));
    }

    #[test]
    fn skipped_records_are_reported() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("journal.json");
        fs::write(&path, r#"[1, {"title": "Kept", "uuid": "x"}, "nope"]"#).unwrap();
        let store = JsonFileStore::open(&path).unwrap();

        let result = store.load();

        assert_eq!(result.entries.len(), 1);
        assert_eq!(result.entries[0].id, "x");
        assert_eq!(result.errors.len(), 2);
        assert!(
            result
                .errors
                .iter()
                .all(|e| matches!(e, QueryError::InvalidRecord { .. }))
        );
    }

    #[test]
    fn unreadable_document_is_reported() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("journal.json");
        let store = JsonFileStore::open(&path).unwrap();
        fs::remove_file(&path).unwrap();
        fs::create_dir(&path).unwrap();

        let result = store.load();

        assert!(result.entries.is_empty());
        assert!(matches!(&result.errors[0], QueryError::FileError { .. }));
    }
}
