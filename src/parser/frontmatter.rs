use crate::domain::{Category, EntryMetadata};
use crate::parser::model::{FieldValue, Frontmatter};
use crate::parser::slug::create_slug;
use log::{error, warn};
use serde_json::Value;
use thiserror::Error;

const OPENING_DELIMITER: &str = "---\n";
const CLOSING_DELIMITER: &str = "\n---\n";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FrontmatterError {
    #[error("no frontmatter found")]
    Missing,

    #[error("frontmatter is missing required field '{field}'")]
    MissingField { field: &'static str },

    #[error("frontmatter field '{field}' is invalid: {reason}")]
    InvalidField { field: &'static str, reason: String },
}

// the document must open with a `---` line; the block runs to the next `---` line
pub fn split_frontmatter(markdown: &str) -> Option<(&str, &str)> {
    let rest = markdown.strip_prefix(OPENING_DELIMITER)?;
    let end = rest.find(CLOSING_DELIMITER)?;
    Some((&rest[..end], &rest[end + CLOSING_DELIMITER.len()..]))
}

// removes a leading front-matter block (if any) and trims the remaining body
pub fn strip_frontmatter(markdown: &str) -> &str {
    match split_frontmatter(markdown) {
        Some((_, body)) => body.trim(),
        None => markdown.trim(),
    }
}

pub fn parse_frontmatter(markdown: &str) -> Result<Frontmatter, FrontmatterError> {
    let (block, _) = split_frontmatter(markdown).ok_or(FrontmatterError::Missing)?;
    Ok(parse_frontmatter_block(block))
}

// line-oriented "key: value" parsing; lines without a colon are skipped
pub fn parse_frontmatter_block(block: &str) -> Frontmatter {
    let mut frontmatter = Frontmatter::new();

    for line in block.split('\n') {
        let Some((raw_key, raw_value)) = line.split_once(':') else {
            continue;
        };

        let key = raw_key.trim();
        let value = strip_matching_quotes(raw_value.trim());

        frontmatter.insert(key.to_string(), parse_value(key, value));
    }

    frontmatter
}

fn strip_matching_quotes(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.starts_with(quote) && value.ends_with(quote) {
            // a lone quote character strips down to nothing
            return if value.len() >= 2 {
                &value[1..value.len() - 1]
            } else {
                ""
            };
        }
    }
    value
}

fn parse_value(key: &str, value: &str) -> FieldValue {
    if value.starts_with('[') && value.ends_with(']') {
        match serde_json::from_str::<Vec<Value>>(value) {
            Ok(items) => return FieldValue::List(items),
            Err(e) => error!("Error parsing array for {}: {}", key, e),
        }
    }
    FieldValue::Text(value.to_string())
}

impl Frontmatter {
    pub fn to_entry_metadata(&self, filename: &str) -> Result<EntryMetadata, FrontmatterError> {
        let id = self.required_text("id")?;
        let title = self.required_text("title")?;

        let slug = create_slug(&title);
        if slug.is_empty() {
            return Err(FrontmatterError::InvalidField {
                field: "title",
                reason: format!("'{}' produces an empty slug", title),
            });
        }

        let category = match self.optional_text("category")? {
            Some(raw) if !raw.is_empty() => Some(
                raw.parse::<Category>()
                    .map_err(|reason| FrontmatterError::InvalidField {
                        field: "category",
                        reason,
                    })?,
            ),
            _ => None,
        };

        let date = self.optional_text("date")?.unwrap_or_default();
        if !date.is_empty() && !is_valid_date(&date) {
            return Err(FrontmatterError::InvalidField {
                field: "date",
                reason: format!("'{}' is neither YYYY-MM-DD nor RFC 3339", date),
            });
        }

        Ok(EntryMetadata {
            id,
            slug,
            title,
            excerpt: self.optional_text("excerpt")?.unwrap_or_default(),
            category,
            date,
            tags: self.tags(filename),
            filename: filename.to_string(),
        })
    }

    fn required_text(&self, field: &'static str) -> Result<String, FrontmatterError> {
        match self.optional_text(field)? {
            Some(text) if !text.is_empty() => Ok(text),
            _ => Err(FrontmatterError::MissingField { field }),
        }
    }

    fn optional_text(&self, field: &'static str) -> Result<Option<String>, FrontmatterError> {
        match self.get(field) {
            None => Ok(None),
            Some(FieldValue::Text(text)) => Ok(Some(text.clone())),
            Some(FieldValue::List(_)) => Err(FrontmatterError::InvalidField {
                field,
                reason: "expected text, found a list".to_string(),
            }),
        }
    }

    // tags never fail the file; unparsed text is kept as a single tag
    fn tags(&self, filename: &str) -> Vec<String> {
        match self.get("tags") {
            None => Vec::new(),
            Some(FieldValue::List(items)) => items
                .iter()
                .map(|item| match item {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect(),
            Some(FieldValue::Text(raw)) if raw.is_empty() => Vec::new(),
            Some(FieldValue::Text(raw)) => {
                warn!("Tags in {} are not a list, keeping raw value '{}'", filename, raw);
                vec![raw.clone()]
            }
        }
    }
}

fn is_valid_date(date: &str) -> bool {
    chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d").is_ok()
        || chrono::DateTime::parse_from_rfc3339(date).is_ok()
}
