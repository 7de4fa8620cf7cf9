pub mod entry;

pub use entry::{Category, EntriesIndex, EntryMetadata, JournalEntry};
