use async_trait::async_trait;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;

pub mod http;
pub mod local;

pub use http::HttpEntrySource;
pub use local::LocalEntrySource;

// name of the generated index artifact, relative to the entries location
pub const INDEX_FILENAME: &str = "index.json";

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} responded with {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("unable to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("'{0}' resolves outside the entries location")]
    OutsidePath(String),

    #[error("'{0}' not found")]
    NotFound(String),
}

// `name` is either INDEX_FILENAME or an entry's filename, relative to the entries location
#[async_trait]
pub trait EntrySource: Send + Sync {
    async fn fetch(&self, name: &str) -> Result<String, SourceError>;
}

// joins `name` onto `root`, refusing anything but plain path components
pub fn verify_entry_path(root: &Path, name: &str) -> Result<PathBuf, SourceError> {
    let relative = Path::new(name);
    let mut has_components = false;

    for component in relative.components() {
        match component {
            Component::Normal(_) => has_components = true,
            Component::CurDir => {}
            _ => return Err(SourceError::OutsidePath(name.to_string())),
        }
    }

    if !has_components {
        return Err(SourceError::OutsidePath(name.to_string()));
    }

    Ok(root.join(relative))
}
