//! Error type for actor communication.

use crate::model::TodoError;
use thiserror::Error;

/// Errors a caller can see when talking to the todo actor.
///
/// The channel variants mean the request never completed: either the actor's
/// inbox was already closed, or the actor went away before writing the
/// reply. [`ClientError::Todo`] carries the actor's own rejection of the
/// operation (an invalid index).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClientError {
    #[error("todo actor closed its inbox")]
    ActorClosed,
    #[error("todo actor dropped the reply channel")]
    ActorDropped,
    #[error(transparent)]
    Todo(#[from] TodoError),
}
