//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The todo list
//! itself is an immutable `TodoList` value; the helpers below run one of its
//! pure operations and publish the result only when it differs from the
//! current list.

use leptos::prelude::*;
use reactive_stores::Store;
use todo_store::{TodoId, TodoList};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Todos in display order
    pub todos: TodoList,
}

impl AppState {
    pub fn new(todos: TodoList) -> Self {
        Self { todos }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the list with `op(current)`. Returns whether anything changed.
fn publish(store: &AppStore, op: impl FnOnce(&TodoList) -> TodoList) -> bool {
    let todos = store.todos();
    let next = todos.with_untracked(op);
    if todos.with_untracked(|current| *current == next) {
        return false;
    }
    todos.set(next);
    true
}

/// Append a new todo
pub fn store_add_todo(store: &AppStore, title: &str) -> bool {
    publish(store, |todos| todos.add(title))
}

/// Rename the todo with `id`
pub fn store_edit_todo(store: &AppStore, id: &TodoId, title: &str) -> bool {
    publish(store, |todos| todos.edit(id, title))
}

/// Remove the todo with `id`
pub fn store_delete_todo(store: &AppStore, id: &TodoId) -> bool {
    publish(store, |todos| todos.delete(id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use todo_store::seed_list;

    fn titles(store: &AppStore) -> Vec<String> {
        store
            .todos()
            .with_untracked(|todos| todos.iter().map(|t| t.title.clone()).collect())
    }

    #[test]
    fn test_add_publishes_new_list() {
        let owner = Owner::new();
        owner.with(|| {
            let store = Store::new(AppState::new(seed_list()));
            assert!(store_add_todo(&store, "Write tests"));
            assert_eq!(titles(&store).last().map(String::as_str), Some("Write tests"));
        });
    }

    #[test]
    fn test_noop_operations_do_not_publish() {
        let owner = Owner::new();
        owner.with(|| {
            let store = Store::new(AppState::new(seed_list()));
            let missing = TodoId::from("missing");
            assert!(!store_delete_todo(&store, &missing));
            assert!(!store_edit_todo(&store, &missing, "x"));
            assert!(!store_add_todo(&store, ""));
            assert_eq!(titles(&store), vec!["Learn React", "Learn TypeScript", "Learn Redux"]);
        });
    }

    #[test]
    fn test_edit_then_delete() {
        let owner = Owner::new();
        owner.with(|| {
            let store = Store::new(AppState::new(seed_list()));
            let react = TodoId::from("123-123-123-123-123");
            assert!(store_edit_todo(&store, &react, "Learn React deeply"));
            assert!(store_delete_todo(&store, &TodoId::from("333-333-333-333-333")));
            assert_eq!(titles(&store), vec!["Learn React deeply", "Learn TypeScript"]);
        });
    }
}
