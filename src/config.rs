use anyhow::{bail, Result};
use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct JournalConfig {
    pub entries_dir: PathBuf,
    pub base_url: String,
    pub base_path: String,
    pub preview_server: bool,
    pub bind_address: String,
}

impl Default for JournalConfig {
    fn default() -> Self {
        Self {
            entries_dir: PathBuf::from("./public/entries"),
            base_url: "http://127.0.0.1:3000/journal-y".to_string(),
            base_path: "/journal-y".to_string(),
            preview_server: false,
            bind_address: "0.0.0.0:3000".to_string(),
        }
    }
}

impl JournalConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    // resolves every setting through `lookup`, falling back to the defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let entries_dir = lookup("ENTRIES_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.entries_dir);

        let base_url = lookup("JOURNAL_BASE_URL").unwrap_or(defaults.base_url);

        let base_path = lookup("JOURNAL_BASE_PATH")
            .map(|path| normalize_base_path(&path))
            .unwrap_or(defaults.base_path);

        let preview_server = match lookup("PREVIEW_SERVER").as_deref() {
            None | Some("") => defaults.preview_server,
            Some("true") => true,
            Some("false") => false,
            Some(other) => bail!("PREVIEW_SERVER must be 'true' or 'false', got '{}'", other),
        };

        let bind_address = lookup("BIND_ADDRESS").unwrap_or(defaults.bind_address);

        Ok(Self {
            entries_dir,
            base_url,
            base_path,
            preview_server,
            bind_address,
        })
    }
}

// "journal-y/" and "/journal-y" both mount at "/journal-y"; "/" mounts at the root
fn normalize_base_path(path: &str) -> String {
    let trimmed = path.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{}", trimmed)
    }
}
