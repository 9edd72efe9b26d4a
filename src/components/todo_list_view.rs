//! Todo List View Component
//!
//! Rows are keyed by todo id: a row that survives a list change keeps its
//! edit state, a removed row drops it.

use leptos::prelude::*;

use crate::components::TodoRow;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn TodoListView() -> impl IntoView {
    let store = use_app_store();

    view! {
        <ul class="todo-list">
            <For
                each=move || store.todos().get()
                key=|todo| todo.id.clone()
                children=move |todo| view! { <TodoRow todo=todo /> }
            />
        </ul>
    }
}
