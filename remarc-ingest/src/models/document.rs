//! Assembled content document

use crate::models::DirectoryAttributes;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Document built for one item group
///
/// Serializes as a flat JSON object: `id`, `theme`, `decade` (null when
/// absent) plus one entry per content key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssembledDocument {
    pub id: String,
    pub theme: Option<String>,
    pub decade: Option<String>,
    #[serde(flatten)]
    pub content: BTreeMap<String, String>,
}

impl AssembledDocument {
    /// Start a document carrying the id and directory attributes
    pub fn new(id: impl Into<String>, attributes: &DirectoryAttributes) -> Self {
        Self {
            id: id.into(),
            theme: attributes.theme().map(str::to_string),
            decade: attributes.decade().map(str::to_string),
            content: BTreeMap::new(),
        }
    }

    /// Set a content entry, returning the value it replaced
    pub fn set_content(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.content.insert(key.into(), value.into())
    }

    pub fn content(&self, key: &str) -> Option<&str> {
        self.content.get(key).map(String::as_str)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
