use crate::domain::{EntriesIndex, EntryMetadata, JournalEntry};
use crate::io::{EntrySource, SourceError, INDEX_FILENAME};
use crate::parser::frontmatter::strip_frontmatter;
use crate::services::listing::{sort_newest_first, CategoryFilter, ListingState};
use log::{debug, error};
use thiserror::Error;
use tokio::sync::OnceCell;

pub use crate::parser::slug::create_slug;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to fetch entries index: {0}")]
    Fetch(#[from] SourceError),

    #[error("failed to parse entries index: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum EntryError {
    #[error("no entry with slug '{0}'")]
    NotFound(String),

    #[error("entries index unavailable: {0}")]
    IndexUnavailable(#[source] LoadError),

    #[error("failed to fetch {filename}: {source}")]
    FetchFailed {
        filename: String,
        #[source]
        source: SourceError,
    },
}

impl EntryError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, EntryError::NotFound(_))
    }
}

/// Runtime access to the entries index and entry bodies.
///
/// The index is fetched once per loader and kept for its lifetime. Concurrent first callers share
/// a single fetch, and a failed fetch leaves nothing cached.
pub struct EntryLoader {
    source: Box<dyn EntrySource>,
    index: OnceCell<EntriesIndex>,
}

impl EntryLoader {
    pub fn new(source: Box<dyn EntrySource>) -> Self {
        Self {
            source,
            index: OnceCell::new(),
        }
    }

    pub async fn load_index(&self) -> Result<&EntriesIndex, LoadError> {
        if let Some(index) = self.index.get() {
            debug!("Entries index served from cache");
            return Ok(index);
        }

        self.index
            .get_or_try_init(|| async move {
                let fetched = self.fetch_index().await;
                if let Err(e) = &fetched {
                    error!("Error loading entries index: {}", e);
                }
                fetched
            })
            .await
    }

    async fn fetch_index(&self) -> Result<EntriesIndex, LoadError> {
        let raw = self.source.fetch(INDEX_FILENAME).await?;
        let index = serde_json::from_str::<EntriesIndex>(&raw)?;
        Ok(index)
    }

    pub fn cached_index(&self) -> Option<&EntriesIndex> {
        self.index.get()
    }

    // stored index order; sorting for display is up to the caller
    pub async fn get_all_entries_metadata(&self) -> Result<&[EntryMetadata], LoadError> {
        let index = self.load_index().await?;
        Ok(&index.entries)
    }

    // exact, case-sensitive match on the category name
    pub async fn get_entries_by_category(
        &self,
        category: &str,
    ) -> Result<Vec<&EntryMetadata>, LoadError> {
        let index = self.load_index().await?;
        Ok(index
            .entries
            .iter()
            .filter(|e| e.category.map(|c| c.as_str()) == Some(category))
            .collect())
    }

    pub async fn load_entry_by_slug(&self, slug: &str) -> Result<JournalEntry, EntryError> {
        let index = self
            .load_index()
            .await
            .map_err(EntryError::IndexUnavailable)?;

        let metadata = index
            .find_by_slug(slug)
            .ok_or_else(|| EntryError::NotFound(slug.to_string()))?;

        let markdown = match self.source.fetch(&metadata.filename).await {
            Ok(markdown) => markdown,
            Err(source) => {
                error!("Error loading entry with slug {}: {}", slug, source);
                return Err(EntryError::FetchFailed {
                    filename: metadata.filename.clone(),
                    source,
                });
            }
        };

        Ok(JournalEntry {
            metadata: metadata.clone(),
            content: strip_frontmatter(&markdown).to_string(),
        })
    }

    pub async fn listing(&self, filter: &CategoryFilter) -> ListingState {
        let index = match self.load_index().await {
            Ok(index) => index,
            Err(e) => return ListingState::Failed(e.to_string()),
        };

        let mut entries: Vec<EntryMetadata> = index
            .entries
            .iter()
            .filter(|e| filter.matches(e))
            .cloned()
            .collect();
        sort_newest_first(&mut entries);

        ListingState::from_entries(entries)
    }
}
