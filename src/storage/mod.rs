//! Whole-file JSON persistence for the todo list.
//!
//! The actor never touches the file. Callers (HTTP handlers, the CLI, the
//! shutdown path) take a `GetAll` snapshot and hand it to [`TodoStore::save`]
//! after each mutation. A failed save is logged and the in-memory state
//! stays authoritative; a crash between the actor's reply and the save loses
//! that mutation on restart — a known durability gap, accepted by design
//! here and not silently fixed.

use crate::model::TodoList;
use crate::trace::TraceId;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Errors from loading or saving the todo file.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("todo file io: {0}")]
    Io(#[from] std::io::Error),
    #[error("todo file encoding: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Seam between the runtime and the concrete persistence format.
#[async_trait]
pub trait TodoStore: Send + Sync {
    /// Serializes the whole list and overwrites the backing file.
    async fn save(&self, trace: &TraceId, todos: &TodoList) -> Result<(), StorageError>;

    /// Reads and deserializes the whole backing file.
    ///
    /// A missing or corrupt file is an error; the caller decides whether to
    /// start from an empty list.
    async fn load(&self, trace: &TraceId) -> Result<TodoList, StorageError>;
}

/// Stores the list as a pretty-printed JSON array of
/// `{description, status, createdAt}` objects.
///
/// Saves overwrite the file in place; the write is not atomic, so a crash
/// mid-write can corrupt the file. Acceptable for this system's scope.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl TodoStore for JsonFileStore {
    async fn save(&self, trace: &TraceId, todos: &TodoList) -> Result<(), StorageError> {
        let data = serde_json::to_vec_pretty(todos)?;
        tokio::fs::write(&self.path, data).await?;
        info!(trace_id = %trace, file = %self.path.display(), len = todos.len(), "Todos saved");
        Ok(())
    }

    async fn load(&self, trace: &TraceId) -> Result<TodoList, StorageError> {
        let data = tokio::fs::read(&self.path).await?;
        let todos: TodoList = serde_json::from_slice(&data)?;
        info!(trace_id = %trace, file = %self.path.display(), len = todos.len(), "Todos loaded");
        Ok(todos)
    }
}
