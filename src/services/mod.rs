pub mod builder;
pub mod listing;
pub mod loader;

pub use builder::{build_index, BuildReport};
pub use listing::{CategoryFilter, ListingState};
pub use loader::{EntryError, EntryLoader, LoadError};
