//! Pure todo data: the entity, its status cycle, and the list mutations.
//!
//! Nothing in this module is concurrency-aware. Every mutation assumes it is
//! the only writer; exclusive access is the job of the actor in
//! [`crate::actor`], which owns the single authoritative [`TodoList`].
//!
//! A todo's identity is positional: operations address todos by their current
//! index in the list, and [`TodoList::delete`] renumbers everything after the
//! removed element. Callers caching an index across calls must account for
//! that.

pub mod error;

pub use error::TodoError;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle state of a single todo.
///
/// Serialized using the human-readable strings of the persisted file format
/// (`"Not started"`, `"Started"`, `"Completed"`). Any unrecognized status in
/// a persisted file deserializes to [`Status::NotStarted`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    Started,
    Completed,
    // Declared last: serde requires the `other` fallback variant to be the
    // final one.
    #[default]
    #[serde(rename = "Not started", other)]
    NotStarted,
}

impl Status {
    /// Advances to the next state in the fixed cycle
    /// NotStarted → Started → Completed → NotStarted.
    pub fn next(self) -> Status {
        match self {
            Status::NotStarted => Status::Started,
            Status::Started => Status::Completed,
            Status::Completed => Status::NotStarted,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::NotStarted => "Not started",
            Status::Started => "Started",
            Status::Completed => "Completed",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single task record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub description: String,
    pub status: Status,
    pub created_at: DateTime<Utc>,
}

impl Todo {
    /// Creates a fresh todo: status `NotStarted`, created now.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            status: Status::NotStarted,
            created_at: Utc::now(),
        }
    }
}

/// Ordered list of todos; insertion order defines both display order and
/// index-based addressing.
///
/// Every index-taking operation validates `index < len` before touching the
/// list, so a failed operation never leaves a partial mutation behind.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoList(Vec<Todo>);

impl TodoList {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Todo> {
        self.0.iter()
    }

    fn validate_index(&self, index: usize) -> Result<(), TodoError> {
        if index >= self.0.len() {
            return Err(TodoError::InvalidIndex {
                index,
                len: self.0.len(),
            });
        }
        Ok(())
    }

    /// Appends a new todo. Always succeeds.
    pub fn add(&mut self, description: impl Into<String>) {
        self.0.push(Todo::new(description));
    }

    /// Replaces the description at `index`, preserving status and creation
    /// time.
    pub fn edit(&mut self, index: usize, description: impl Into<String>) -> Result<(), TodoError> {
        self.validate_index(index)?;
        self.0[index].description = description.into();
        Ok(())
    }

    /// Removes the todo at `index`, shifting every following index down by
    /// one.
    pub fn delete(&mut self, index: usize) -> Result<(), TodoError> {
        self.validate_index(index)?;
        self.0.remove(index);
        Ok(())
    }

    /// Cycles the status at `index` one step forward.
    pub fn toggle(&mut self, index: usize) -> Result<(), TodoError> {
        self.validate_index(index)?;
        let todo = &mut self.0[index];
        todo.status = todo.status.next();
        Ok(())
    }

    /// Returns a copy of the todo at `index`.
    pub fn get(&self, index: usize) -> Result<Todo, TodoError> {
        self.validate_index(index)?;
        Ok(self.0[index].clone())
    }
}

impl From<Vec<Todo>> for TodoList {
    fn from(todos: Vec<Todo>) -> Self {
        Self(todos)
    }
}
