use crate::io::{verify_entry_path, EntrySource, SourceError};
use async_trait::async_trait;
use std::path::PathBuf;

/// Reads the index and entry bodies straight from the entries directory.
pub struct LocalEntrySource {
    pub root_path: PathBuf,
}

impl LocalEntrySource {
    pub fn new(root_path: PathBuf) -> Self {
        Self { root_path }
    }
}

#[async_trait]
impl EntrySource for LocalEntrySource {
    async fn fetch(&self, name: &str) -> Result<String, SourceError> {
        let path = verify_entry_path(&self.root_path, name)?;

        match tokio::fs::read_to_string(&path).await {
            Ok(text) => Ok(text),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(SourceError::NotFound(name.to_string()))
            }
            Err(source) => Err(SourceError::Io { path, source }),
        }
    }
}
