pub mod config;
pub mod journal;
pub mod store;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use journal::{
    DeleteOutcome, Journal, JournalEntry, JournalQueryResult, JournalWriteEntry, parse_tags,
};
pub use store::{JournalStore, JsonFileStore, LoadResult, MemoryStore, QueryError};
