//! New Todo Form Component
//!
//! Single-line input plus an Add button. The button stays disabled while
//! the input is empty.

use leptos::prelude::*;

use crate::components::input_value;
use crate::edit_state::AddDraft;
use crate::store::{store_add_todo, use_app_store};

/// Form for creating new todos
#[component]
pub fn NewTodoForm(#[prop(into)] placeholder: String) -> impl IntoView {
    let store = use_app_store();
    let draft = RwSignal::new(AddDraft::default());

    let create_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(title) = draft.try_update(AddDraft::take_submission).flatten() else {
            return;
        };
        store_add_todo(&store, &title);
    };

    view! {
        <form class="new-todo-form" on:submit=create_todo>
            <input
                type="text"
                placeholder=placeholder
                prop:value=move || draft.with(|d| d.text().to_string())
                on:input=move |ev| {
                    if let Some(text) = input_value(&ev) {
                        draft.update(|d| d.set_text(text));
                    }
                }
            />
            <button type="submit" disabled=move || !draft.with(AddDraft::can_submit)>
                "Add"
            </button>
        </form>
    }
}
