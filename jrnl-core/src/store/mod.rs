mod json_store;
mod memory_store;
mod store;

pub use json_store::JsonFileStore;
pub use memory_store::MemoryStore;
pub use store::{JournalStore, LoadResult, QueryError};
