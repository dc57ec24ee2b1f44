//! Todo Entity
//!
//! The durable record for a single task. UI-only edit state (the inline
//! editor's draft text) lives in the frontend, keyed by `TodoId`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque unique identifier for a todo
///
/// Generated ids are UUID v4 strings. Any non-empty string is accepted when
/// restoring so lists written by earlier builds keep their ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(String);

impl TodoId {
    /// Fresh random id
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for TodoId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for TodoId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A todo item as stored
///
/// Unknown fields are ignored on decode, which keeps older stored lists
/// (carrying `editing` / `editedDescription`) readable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    /// Unique identifier, never changes after creation
    pub id: TodoId,
    /// User-supplied text
    pub description: String,
    /// Completion status
    #[serde(default)]
    pub completed: bool,
}

impl TodoItem {
    /// Create a new, not yet completed item with a fresh id
    pub fn new(description: impl Into<String>) -> Self {
        Self::with_id(TodoId::generate(), description)
    }

    pub fn with_id(id: TodoId, description: impl Into<String>) -> Self {
        Self {
            id,
            description: description.into(),
            completed: false,
        }
    }

    pub fn is_active(&self) -> bool {
        !self.completed
    }
}

/// Normalize user text, returning `None` when nothing is left
pub(crate) fn normalize_description(description: &str) -> Option<String> {
    let trimmed = description.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_creation() {
        let item = TodoItem::new("Buy milk");
        assert_eq!(item.description, "Buy milk");
        assert!(!item.completed);
        assert!(item.is_active());
        assert!(!item.id.as_str().is_empty());
    }

    #[test]
    fn test_generated_ids_differ() {
        assert_ne!(TodoId::generate(), TodoId::generate());
    }

    #[test]
    fn test_serialized_shape() {
        let item = TodoItem::with_id(TodoId::from("abc"), "Walk dog");
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "id": "abc", "description": "Walk dog", "completed": false })
        );
    }

    #[test]
    fn test_legacy_fields_are_ignored() {
        let raw = r#"{"id":"V1StGXR8_Z5jdHi6B-myT","description":"Old","completed":true,"editing":true,"editedDescription":"draft"}"#;
        let item: TodoItem = serde_json::from_str(raw).unwrap();
        assert_eq!(item.id.as_str(), "V1StGXR8_Z5jdHi6B-myT");
        assert_eq!(item.description, "Old");
        assert!(item.completed);
    }

    #[test]
    fn test_missing_completed_defaults_to_false() {
        let item: TodoItem = serde_json::from_str(r#"{"id":"x","description":"d"}"#).unwrap();
        assert!(!item.completed);
    }

    #[test]
    fn test_normalize_description() {
        assert_eq!(normalize_description("  tea  ").as_deref(), Some("tea"));
        assert_eq!(normalize_description(""), None);
        assert_eq!(normalize_description(" \t\n"), None);
    }
}
