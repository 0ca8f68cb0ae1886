use crate::store::QueryError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub title: String,
    pub content: String,
    pub date: String,
    pub tags: Vec<String>,
    #[serde(rename = "uuid")]
    pub id: String,
}

/// Properties to create a new JournalEntry.
/// The date and id are always assigned by the journal.
#[derive(Debug, Clone, Default)]
pub struct JournalWriteEntry {
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
}

/// A record as found in the storage document, before defaults are applied.
///
/// Every field is kept as a raw JSON value so that a field with an unexpected
/// type falls back to its default instead of rejecting the whole record.
#[derive(Debug, Default, Deserialize)]
pub struct StoredEntry {
    pub title: Option<Value>,
    pub content: Option<Value>,
    pub date: Option<Value>,
    pub tags: Option<Value>,
    pub uuid: Option<Value>,
}

/// The complete result of a query.
/// Contains successfully parsed entries and any errors.
#[derive(Debug)]
pub struct JournalQueryResult {
    pub entries: Vec<JournalEntry>,
    pub errors: Vec<QueryError>,
}
