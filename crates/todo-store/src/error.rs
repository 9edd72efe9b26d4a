//! Store errors
//!
//! Only raised while building a list from external seed data. The list
//! operations themselves never fail.

use thiserror::Error;

use crate::domain::TodoId;

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("duplicate todo id: {0}")]
    DuplicateId(TodoId),

    #[error("todo {0} has an empty title")]
    EmptyTitle(TodoId),
}
