use derive_more::derive::Display;
use log::warn;
use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;

// the closed set of journal categories, serialized in their kebab-case form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    #[display("leetcode")]
    Leetcode,
    #[display("blockchain")]
    Blockchain,
    #[display("system-design")]
    SystemDesign,
    #[display("articles")]
    Articles,
    #[display("thoughts")]
    Thoughts,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Leetcode,
        Category::Blockchain,
        Category::SystemDesign,
        Category::Articles,
        Category::Thoughts,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Leetcode => "leetcode",
            Category::Blockchain => "blockchain",
            Category::SystemDesign => "system-design",
            Category::Articles => "articles",
            Category::Thoughts => "thoughts",
        }
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("'{}' is not a known category", s))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryMetadata {
    pub id: String,
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_known_category"
    )]
    pub category: Option<Category>,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub filename: String,
}

// an index written by another tool may carry a category outside the closed set; the entry stays
// listed and reachable by slug, it just never matches a category filter
fn deserialize_known_category<'de, D>(deserializer: D) -> Result<Option<Category>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|name| match name.parse::<Category>() {
        Ok(category) => Some(category),
        Err(reason) => {
            warn!("{}, entry kept without a category", reason);
            None
        }
    }))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntriesIndex {
    pub entries: Vec<EntryMetadata>,
    pub last_updated: String,
}

impl EntriesIndex {
    pub fn find_by_slug(&self, slug: &str) -> Option<&EntryMetadata> {
        self.entries.iter().find(|e| e.slug == slug)
    }

    pub fn find_by_filename(&self, filename: &str) -> Option<&EntryMetadata> {
        self.entries.iter().find(|e| e.filename == filename)
    }
}

// assembled per request from the index metadata and the fetched markdown body, never cached
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalEntry {
    pub metadata: EntryMetadata,
    pub content: String,
}
