//! Todo List
//!
//! Ordered collection of todos. Every operation takes `&self` and returns a
//! new list, so a caller holding the previous list keeps a stable snapshot
//! and can compare old and new by value.

use std::collections::HashSet;

use serde::Deserialize;

use crate::domain::{Todo, TodoId};
use crate::error::{StoreError, StoreResult};
use crate::seed::SeedEntry;

/// Insertion-ordered list of todos with pairwise distinct ids
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Vec<SeedEntry>")]
pub struct TodoList {
    todos: Vec<Todo>,
}

impl TodoList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list from existing todos, rejecting duplicate ids and empty titles
    pub fn from_todos(todos: Vec<Todo>) -> StoreResult<Self> {
        {
            let mut seen = HashSet::with_capacity(todos.len());
            for todo in &todos {
                if todo.title.is_empty() {
                    return Err(StoreError::EmptyTitle(todo.id.clone()));
                }
                if !seen.insert(&todo.id) {
                    return Err(StoreError::DuplicateId(todo.id.clone()));
                }
            }
        }
        Ok(Self { todos })
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Todo> {
        self.todos.iter()
    }

    pub fn as_slice(&self) -> &[Todo] {
        &self.todos
    }

    pub fn get(&self, id: &TodoId) -> Option<&Todo> {
        self.todos.iter().find(|todo| &todo.id == id)
    }

    pub fn position(&self, id: &TodoId) -> Option<usize> {
        self.todos.iter().position(|todo| &todo.id == id)
    }

    pub fn contains(&self, id: &TodoId) -> bool {
        self.position(id).is_some()
    }

    /// Append a new open todo with a fresh id.
    ///
    /// An empty title is rejected and the list comes back unchanged.
    pub fn add(&self, title: &str) -> Self {
        if title.is_empty() {
            log::warn!("[STORE] add rejected: empty title");
            return self.clone();
        }
        self.add_with_id(self.fresh_id(), title)
    }

    /// Replace the title of the todo with `id`; unknown ids are a no-op.
    ///
    /// An empty title is rejected the same way `add` rejects one.
    pub fn edit(&self, id: &TodoId, title: &str) -> Self {
        if title.is_empty() {
            log::warn!("[STORE] edit {} rejected: empty title", id);
            return self.clone();
        }
        let Some(index) = self.position(id) else {
            log::debug!("[STORE] edit {}: no such todo", id);
            return self.clone();
        };
        let mut todos = self.todos.clone();
        todos[index] = todos[index].retitled(title);
        log::debug!("[STORE] edit {} -> {:?}", id, title);
        Self { todos }
    }

    /// Remove the todo with `id`; unknown ids are a no-op.
    pub fn delete(&self, id: &TodoId) -> Self {
        if !self.contains(id) {
            log::debug!("[STORE] delete {}: no such todo", id);
            return self.clone();
        }
        let todos: Vec<Todo> = self
            .todos
            .iter()
            .filter(|todo| &todo.id != id)
            .cloned()
            .collect();
        log::debug!("[STORE] delete {} ({} left)", id, todos.len());
        Self { todos }
    }

    fn add_with_id(&self, id: TodoId, title: &str) -> Self {
        let mut todos = Vec::with_capacity(self.todos.len() + 1);
        todos.extend(self.todos.iter().cloned());
        log::debug!("[STORE] add {} {:?}", id, title);
        todos.push(Todo::new(id, title));
        Self { todos }
    }

    fn fresh_id(&self) -> TodoId {
        loop {
            let id = TodoId::generate();
            if !self.contains(&id) {
                return id;
            }
        }
    }
}

impl TryFrom<Vec<SeedEntry>> for TodoList {
    type Error = StoreError;

    fn try_from(entries: Vec<SeedEntry>) -> StoreResult<Self> {
        Self::from_todos(entries.into_iter().map(SeedEntry::into_todo).collect())
    }
}

impl IntoIterator for TodoList {
    type Item = Todo;
    type IntoIter = std::vec::IntoIter<Todo>;

    fn into_iter(self) -> Self::IntoIter {
        self.todos.into_iter()
    }
}

impl<'a> IntoIterator for &'a TodoList {
    type Item = &'a Todo;
    type IntoIter = std::slice::Iter<'a, Todo>;

    fn into_iter(self) -> Self::IntoIter {
        self.todos.iter()
    }
}
