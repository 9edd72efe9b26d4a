//! Todo Store
//!
//! The list state behind the todo UI: an ordered collection of todos and the
//! pure operations that derive a new collection from an old one.

pub mod domain;
pub mod error;
pub mod list;
pub mod seed;

pub use domain::{Todo, TodoId};
pub use error::{StoreError, StoreResult};
pub use list::TodoList;
pub use seed::{seed_list, SeedEntry};
