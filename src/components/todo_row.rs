//! Todo Row Component
//!
//! One list entry with a view mode (title, delete, edit) and an edit mode
//! (title input, save, edit toggle).

use leptos::prelude::*;
use todo_store::Todo;

use crate::components::input_value;
use crate::edit_state::RowEdit;
use crate::store::{store_delete_todo, store_edit_todo, use_app_store, AppStateStoreFields};

/// A single todo row
#[component]
pub fn TodoRow(todo: Todo) -> impl IntoView {
    let store = use_app_store();

    let row = RwSignal::new(RowEdit::new(&todo.title));
    let id = StoredValue::new(todo.id);

    // The row outlives title edits, so read the current todo back from the store
    let current = Memo::new(move |_| {
        store
            .todos()
            .with(|todos| id.with_value(|id| todos.get(id).cloned()))
    });
    let title = move || current.get().map(|t| t.title).unwrap_or_default();
    let row_class = move || {
        if current.get().is_some_and(|t| t.completed) {
            "todo-row completed"
        } else {
            "todo-row"
        }
    };

    let toggle = move |_: web_sys::MouseEvent| row.update(RowEdit::toggle);
    let delete = move |_: web_sys::MouseEvent| {
        id.with_value(|id| store_delete_todo(&store, id));
    };
    let save = move |_: web_sys::MouseEvent| {
        if let Some(new_title) = row.try_update(RowEdit::save).flatten() {
            id.with_value(|id| store_edit_todo(&store, id, &new_title));
        }
    };

    view! {
        <li class=row_class>
            <Show
                when=move || row.with(RowEdit::is_editing)
                fallback=move || view! {
                    <span class="todo-title">{title}</span>
                    <button class="delete-btn" aria-label="delete" on:click=delete>"❌"</button>
                    <button class="edit-btn" aria-label="edit" on:click=toggle>"✏️"</button>
                }
            >
                <input
                    type="text"
                    class="todo-title-input"
                    prop:value=move || row.with(|r| r.pending_title().to_string())
                    on:input=move |ev| {
                        if let Some(text) = input_value(&ev) {
                            row.update(|r| r.set_pending_title(text));
                        }
                    }
                />
                <button class="save-btn" disabled=move || !row.with(RowEdit::can_save) on:click=save>
                    "Save"
                </button>
                <button class="edit-btn" aria-label="edit" on:click=toggle>"✏️"</button>
            </Show>
        </li>
    }
}
