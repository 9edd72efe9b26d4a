//! Todo Entity
//!
//! A single list entry: identifier, title and completion flag.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque todo identifier.
///
/// Generated ids are random v4 UUIDs; seeded ids keep whatever string they
/// were declared with.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(String);

impl TodoId {
    /// Fresh random identifier (128-bit UUID v4)
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
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

/// A todo item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Unique identifier, never reused
    pub id: TodoId,
    /// Display text
    pub title: String,
    /// Completion status (nothing flips it yet)
    pub completed: bool,
}

impl Todo {
    /// Create an open todo with the given id and title
    pub fn new(id: TodoId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            completed: false,
        }
    }

    /// Copy of this todo with a different title
    pub fn retitled(&self, title: &str) -> Self {
        Self {
            title: title.to_string(),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_todo_creation() {
        let todo = Todo::new(TodoId::from("abc"), "Test item");
        assert_eq!(todo.id.as_str(), "abc");
        assert_eq!(todo.title, "Test item");
        assert!(!todo.completed);
    }

    #[test]
    fn test_retitled_keeps_identity() {
        let todo = Todo {
            completed: true,
            ..Todo::new(TodoId::from("abc"), "Old")
        };
        let renamed = todo.retitled("New");
        assert_eq!(renamed.id, todo.id);
        assert_eq!(renamed.title, "New");
        assert!(renamed.completed);
        assert_eq!(todo.title, "Old");
    }

    #[test]
    fn test_generated_ids_are_uuids() {
        let a = TodoId::generate();
        let b = TodoId::generate();
        assert_ne!(a, b);
        assert!(Uuid::parse_str(a.as_str()).is_ok());
    }

    #[test]
    fn test_id_serializes_as_plain_string() {
        let id = TodoId::from("123-123-123-123-123");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"123-123-123-123-123\"");
    }
}
