//! Todo App
//!
//! Root component: heading, add form, todo list and item counter.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{NewTodoForm, TodoListView};
use crate::config::AppConfig;
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let AppConfig {
        heading,
        placeholder,
        seed,
        ..
    } = config;

    // Provide the store to all children
    let store = Store::new(AppState::new(seed));
    provide_context(store);

    let item_count = move || {
        let count = store.todos().with(|todos| todos.len());
        if count == 1 {
            "1 item".to_string()
        } else {
            format!("{} items", count)
        }
    };

    view! {
        <main class="app">
            <h1>{heading}</h1>

            <NewTodoForm placeholder=placeholder />

            <TodoListView />

            <p class="item-count">{item_count}</p>
        </main>
    }
}
