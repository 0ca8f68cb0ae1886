mod format_utils;
mod journal;
mod journal_entry;
mod parse_entries;

pub use format_utils::{format_timestamp, parse_tags};
pub use journal::{DeleteOutcome, Journal};
pub use journal_entry::{JournalEntry, JournalQueryResult, JournalWriteEntry, StoredEntry};
pub use parse_entries::{ParseResult, parse_stored_entries};
