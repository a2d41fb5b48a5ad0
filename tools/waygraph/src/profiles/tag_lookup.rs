//! Tag lookup utility for profiles
//!
//! Read-only view over an element's tag map. An absent key, an empty value
//! and the value `"no"` are three different answers.

use crate::parse::Tags;

/// Helper for looking up tags on a single element
#[derive(Debug, Clone, Copy)]
pub struct TagLookup<'a> {
    tags: &'a Tags,
}

impl<'a> TagLookup<'a> {
    pub fn new(tags: &'a Tags) -> Self {
        Self { tags }
    }

    /// Get a tag value by key name
    pub fn get_str(&self, key: &str) -> Option<&'a str> {
        self.tags.get(key).map(String::as_str)
    }

    /// True only when the key is present and equals `value` exactly
    pub fn is(&self, key: &str, value: &str) -> bool {
        self.get_str(key) == Some(value)
    }

    /// True when the key is present and its value is one of `values`
    pub fn is_any(&self, key: &str, values: &[&str]) -> bool {
        self.get_str(key).is_some_and(|v| values.contains(&v))
    }
}
