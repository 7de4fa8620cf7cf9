use crate::domain::{Category, EntryMetadata};
use chrono::NaiveDateTime;
use std::cmp::Reverse;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(&self, entry: &EntryMetadata) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => entry.category == Some(*category),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(CategoryFilter::All),
            other => other.parse::<Category>().map(CategoryFilter::Only),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ListingState {
    #[default]
    Loading,
    Failed(String),
    Empty,
    Ready(Vec<EntryMetadata>),
}

impl ListingState {
    pub fn from_entries(entries: Vec<EntryMetadata>) -> Self {
        if entries.is_empty() {
            ListingState::Empty
        } else {
            ListingState::Ready(entries)
        }
    }

    pub fn entries(&self) -> &[EntryMetadata] {
        match self {
            ListingState::Ready(entries) => entries,
            _ => &[],
        }
    }
}

// newest first; entries whose date does not parse go last, keeping their relative order
pub fn sort_newest_first(entries: &mut [EntryMetadata]) {
    entries.sort_by_key(|entry| Reverse(parse_entry_date(&entry.date)));
}

pub fn parse_entry_date(date: &str) -> Option<NaiveDateTime> {
    // tier 1: RFC 3339 timestamps
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(date) {
        return Some(dt.naive_utc());
    }

    // tier 2: plain YYYY-MM-DD, at midnight
    chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}
