//! Builds and serves the journal's entries index.
//!
//! The builder scans a directory of markdown entries and writes `index.json`; the loader reads
//! that index back (over HTTP or from disk) and assembles entries on demand.

use crate::config::JournalConfig;
use crate::services::loader::EntryLoader;
use std::sync::Arc;

pub mod config;
pub mod domain;
pub mod features;
pub mod io;
pub mod parser;
pub mod services;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub loader: Arc<EntryLoader>,
    pub config: Arc<JournalConfig>,
}
