//! UI Components
//!
//! Reusable Leptos components.

mod new_todo_form;
mod todo_list_view;
mod todo_row;

pub use new_todo_form::NewTodoForm;
pub use todo_list_view::TodoListView;
pub use todo_row::TodoRow;

use wasm_bindgen::JsCast;

/// Current value of the `<input>` an event came from
fn input_value(ev: &web_sys::Event) -> Option<String> {
    ev.target()?
        .dyn_ref::<web_sys::HtmlInputElement>()
        .map(|input| input.value())
}
