//! Domain Layer
//!
//! Core entity types for the todo list.

mod todo;

pub use todo::{Todo, TodoId};
