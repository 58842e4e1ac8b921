//! Error types for todo list operations.

use thiserror::Error;

/// Errors that can occur while reading or mutating the todo list.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TodoError {
    /// The referenced position does not exist in the list.
    #[error("invalid index {index}: list has {len} todos")]
    InvalidIndex { index: usize, len: usize },
}
