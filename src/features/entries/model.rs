use crate::domain::{Category, JournalEntry};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct JsonEntry {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub category: Option<Category>,
    pub date: String,
    pub tags: Vec<String>,
    pub content: String,
    pub html_content: String,
}

impl JsonEntry {
    pub fn new(entry: JournalEntry, html_content: String) -> Self {
        let metadata = entry.metadata;
        Self {
            id: metadata.id,
            slug: metadata.slug,
            title: metadata.title,
            excerpt: metadata.excerpt,
            category: metadata.category,
            date: metadata.date,
            tags: metadata.tags,
            content: entry.content,
            html_content,
        }
    }
}

#[derive(Deserialize, Debug, Default)]
pub struct ListQuery {
    pub category: Option<String>,
}
