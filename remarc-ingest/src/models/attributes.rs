//! Directory-level attributes from a properties file

use std::collections::BTreeMap;

/// Attributes shared by every item group in one directory
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryAttributes {
    properties: BTreeMap<String, String>,
}

impl DirectoryAttributes {
    pub const THEME: &'static str = "theme";
    pub const DECADE: &'static str = "decade";

    /// Wrap parsed properties
    ///
    /// Returns `None` unless at least one of `theme` or `decade` is present.
    pub fn from_properties(properties: BTreeMap<String, String>) -> Option<Self> {
        if properties.contains_key(Self::THEME) || properties.contains_key(Self::DECADE) {
            Some(Self { properties })
        } else {
            None
        }
    }

    pub fn theme(&self) -> Option<&str> {
        self.get(Self::THEME)
    }

    pub fn decade(&self) -> Option<&str> {
        self.get(Self::DECADE)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }
}
