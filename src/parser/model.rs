use serde_json::Value;
use std::collections::BTreeMap;

// a single front-matter value: either the raw (quote-stripped) text, or a parsed JSON array
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    List(Vec<Value>),
}

impl FieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(text) => Some(text),
            FieldValue::List(_) => None,
        }
    }
}

// unknown keys are kept alongside the known ones
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frontmatter {
    fields: BTreeMap<String, FieldValue>,
}

impl Frontmatter {
    pub fn new() -> Self {
        Self::default()
    }

    // later duplicates replace earlier ones
    pub fn insert(&mut self, key: String, value: FieldValue) {
        self.fields.insert(key, value);
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.get(key)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
