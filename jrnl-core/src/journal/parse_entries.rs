//! Turns the raw records of a storage document into well-formed `JournalEntry` values.
//!
//! This is the only place where defaults are applied. Everything after this
//! step works with a typed collection whose ids are unique.
use super::journal_entry::{JournalEntry, StoredEntry};
use serde_json::Value;
use std::collections::HashSet;
use uuid::Uuid;

pub const DEFAULT_TITLE: &str = "Untitled";
pub const DEFAULT_CONTENT: &str = "";
pub const DEFAULT_DATE: &str = "Unknown date";

#[derive(Debug)]
pub struct ParseResult {
    pub entries: Vec<JournalEntry>,
    pub errors: Vec<String>,
}

pub fn parse_stored_entries(records: Vec<Value>) -> ParseResult {
    let mut entries = Vec::with_capacity(records.len());
    let mut errors = Vec::new();
    let mut seen_ids: HashSet<String> = HashSet::new();

    for (index, record) in records.into_iter().enumerate() {
        let stored = match record {
            Value::Object(map) => match serde_json::from_value::<StoredEntry>(Value::Object(map)) {
                Ok(stored) => stored,
                Err(error) => {
                    errors.push(format!("Skipped record #{index}: {error}."));
                    continue;
                }
            },
            other => {
                errors.push(format!(
                    "Skipped record #{index}: expected an object, found {}.",
                    json_kind(&other)
                ));
                continue;
            }
        };

        let title = text_or(stored.title, DEFAULT_TITLE);
        let content = text_or(stored.content, DEFAULT_CONTENT);
        let date = text_or(stored.date, DEFAULT_DATE);
        let tags = tags_or_empty(stored.tags);

        let id = match stored.uuid {
            Some(Value::String(id)) if !id.is_empty() && !seen_ids.contains(&id) => id,
            Some(Value::String(id)) if seen_ids.contains(&id) => {
                let fresh = derive_id(index, &title, &content, &date, &seen_ids);
                errors.push(format!(
                    "Record #{index} repeats id {id}, it was given id {fresh}."
                ));
                fresh
            }
            _ => derive_id(index, &title, &content, &date, &seen_ids),
        };
        seen_ids.insert(id.clone());

        entries.push(JournalEntry {
            title,
            content,
            date,
            tags,
            id,
        });
    }

    ParseResult { entries, errors }
}

fn text_or(value: Option<Value>, default: &str) -> String {
    match value {
        Some(Value::String(s)) => s,
        _ => default.to_string(),
    }
}

fn tags_or_empty(value: Option<Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    }
}

/// Name-based id for records stored without one.
/// Stable for an unchanged document, so `list` and `delete` agree on it.
fn derive_id(
    index: usize,
    title: &str,
    content: &str,
    date: &str,
    taken: &HashSet<String>,
) -> String {
    let mut salt = 0u32;
    loop {
        let name = format!("{index}\u{1f}{title}\u{1f}{content}\u{1f}{date}\u{1f}{salt}");
        let id = Uuid::new_v5(&Uuid::NAMESPACE_OID, name.as_bytes()).to_string();
        if !taken.contains(&id) {
            return id;
        }
        salt += 1;
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
