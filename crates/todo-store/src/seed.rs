//! Seed Data
//!
//! The fixed set of todos every session starts from, plus the entry shape
//! used when a seed is supplied from configuration.

use serde::{Deserialize, Serialize};

use crate::domain::{Todo, TodoId};
use crate::list::TodoList;

/// Built-in seed: (id, title)
const SEED: &[(&str, &str)] = &[
    ("123-123-123-123-123", "Learn React"),
    ("222-222-222-222-222", "Learn TypeScript"),
    ("333-333-333-333-333", "Learn Redux"),
];

/// One seed todo as written in configuration. A missing id gets a fresh one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedEntry {
    #[serde(default)]
    pub id: Option<TodoId>,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

impl SeedEntry {
    pub fn into_todo(self) -> Todo {
        Todo {
            id: self.id.unwrap_or_else(TodoId::generate),
            title: self.title,
            completed: self.completed,
        }
    }
}

/// The built-in seed list
pub fn seed_list() -> TodoList {
    let todos = SEED
        .iter()
        .map(|(id, title)| Todo::new(TodoId::from(*id), *title))
        .collect();
    // Constant data with distinct ids and non-empty titles
    TodoList::from_todos(todos).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;

    #[test]
    fn test_seed_list_contents() {
        let list = seed_list();
        let titles: Vec<_> = list.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["Learn React", "Learn TypeScript", "Learn Redux"]);
        assert!(list.iter().all(|t| !t.completed));
        assert_eq!(list.as_slice()[0].id, TodoId::from("123-123-123-123-123"));
    }

    #[test]
    fn test_seed_entries_deserialize_into_list() {
        let json = r#"[
            {"id": "a", "title": "First"},
            {"title": "Second", "completed": true}
        ]"#;
        let list: TodoList = serde_json::from_str(json).unwrap();

        assert_eq!(list.len(), 2);
        assert_eq!(list.as_slice()[0].id, TodoId::from("a"));
        assert!(!list.as_slice()[0].completed);
        assert!(list.as_slice()[1].completed);
        assert!(!list.as_slice()[1].id.as_str().is_empty());
    }

    #[test]
    fn test_seed_entries_with_duplicate_ids_fail() {
        let json = r#"[{"id": "a", "title": "x"}, {"id": "a", "title": "y"}]"#;
        let err = serde_json::from_str::<TodoList>(json).unwrap_err();
        assert!(err.to_string().contains(&StoreError::DuplicateId(TodoId::from("a")).to_string()));
    }
}
