//! Type-safe identifier wrappers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier (slug) of a remote content collection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CollectionId(String);

impl CollectionId {
    /// Creates a collection ID from a slug.
    pub fn new(slug: impl Into<String>) -> Self {
        Self(slug.into())
    }

    /// Returns the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the slug is empty or whitespace only.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for CollectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for CollectionId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for CollectionId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for CollectionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_id_display() {
        let id = CollectionId::new("winter-things");
        assert_eq!(id.to_string(), "winter-things");
        assert_eq!(id.as_str(), "winter-things");
    }

    #[test]
    fn test_collection_id_blank() {
        assert!(CollectionId::from("  ").is_blank());
        assert!(!CollectionId::from("x").is_blank());
    }

    #[test]
    fn test_collection_id_serializes_transparently() {
        let id = CollectionId::from("slug");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"slug\"");
    }
}
