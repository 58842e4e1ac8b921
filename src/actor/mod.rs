//! # Sequential access actor
//!
//! The authoritative [`TodoList`] lives inside [`TodoActor`], which runs as
//! a single sequential worker on its own tokio task. No other component may
//! read or write the list directly; everything goes through message passing.
//!
//! ## Protocol
//!
//! Each operation is one [`TodoRequest`] variant carrying its inputs plus a
//! single-use `oneshot` reply channel. A caller (via [`TodoClient`]) builds
//! the request, sends it on the actor's inbox, and awaits the reply. The
//! actor dequeues one message at a time, applies the corresponding list
//! operation, and writes exactly one reply before dequeuing the next.
//!
//! ## Guarantees
//!
//! - Operations are totally ordered by arrival on the inbox; at most one
//!   mutation is in flight at any instant, so no two mutations ever observe
//!   the same pre-state and `GetAll` never sees a torn list.
//! - Validation failures ([`TodoError::InvalidIndex`]) travel back to the
//!   caller in the reply; the loop itself has no failure mode other than
//!   all senders dropping, which ends it.
//! - Replies are written with a non-blocking `send` whose failure is
//!   ignored, so a caller that abandoned its reply channel (timeout,
//!   cancellation) never wedges the loop.

pub mod client;
pub mod error;

pub use client::TodoClient;
pub use error::ClientError;

use crate::model::{Todo, TodoError, TodoList};
use crate::trace::TraceId;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info};

/// Reply channel written exactly once by the actor, read exactly once by
/// the caller.
pub type Reply<T> = oneshot::Sender<T>;

/// Messages the actor understands; one variant per operation.
///
/// Every variant carries the originating request's [`TraceId`] so the
/// actor's log events can be correlated with the boundary layer's.
#[derive(Debug)]
pub enum TodoRequest {
    Add {
        trace: TraceId,
        description: String,
        respond_to: Reply<()>,
    },
    Get {
        trace: TraceId,
        index: usize,
        respond_to: Reply<Result<Todo, TodoError>>,
    },
    GetAll {
        trace: TraceId,
        respond_to: Reply<TodoList>,
    },
    Edit {
        trace: TraceId,
        index: usize,
        description: String,
        respond_to: Reply<Result<(), TodoError>>,
    },
    Delete {
        trace: TraceId,
        index: usize,
        respond_to: Reply<Result<(), TodoError>>,
    },
    Toggle {
        trace: TraceId,
        index: usize,
        respond_to: Reply<Result<(), TodoError>>,
    },
}

/// The server half: owns the list and the receiving end of the inbox.
pub struct TodoActor {
    receiver: mpsc::Receiver<TodoRequest>,
    todos: TodoList,
}

impl TodoActor {
    /// Creates an actor seeded with `todos` (persisted state, or an empty
    /// list) and the client handle paired with its inbox.
    ///
    /// The actor does nothing until [`TodoActor::run`] is spawned.
    pub fn new(buffer: usize, todos: TodoList) -> (Self, TodoClient) {
        let (sender, receiver) = mpsc::channel(buffer);
        (Self { receiver, todos }, TodoClient::new(sender))
    }

    /// Runs the message loop until every client handle has been dropped.
    pub async fn run(mut self) {
        info!(len = self.todos.len(), "Todo actor started");
        while let Some(msg) = self.receiver.recv().await {
            self.handle(msg);
        }
        info!(len = self.todos.len(), "Todo actor shut down");
    }

    fn handle(&mut self, msg: TodoRequest) {
        match msg {
            TodoRequest::Add {
                trace,
                description,
                respond_to,
            } => {
                debug!(trace_id = %trace, %description, "Adding todo");
                self.todos.add(description);
                let _ = respond_to.send(());
            }
            TodoRequest::Get {
                trace,
                index,
                respond_to,
            } => {
                debug!(trace_id = %trace, index, "Getting todo");
                let _ = respond_to.send(self.todos.get(index));
            }
            TodoRequest::GetAll { trace, respond_to } => {
                debug!(trace_id = %trace, len = self.todos.len(), "Getting all todos");
                let _ = respond_to.send(self.todos.clone());
            }
            TodoRequest::Edit {
                trace,
                index,
                description,
                respond_to,
            } => {
                debug!(trace_id = %trace, index, "Editing todo");
                let _ = respond_to.send(self.todos.edit(index, description));
            }
            TodoRequest::Delete {
                trace,
                index,
                respond_to,
            } => {
                debug!(trace_id = %trace, index, "Deleting todo");
                let _ = respond_to.send(self.todos.delete(index));
            }
            TodoRequest::Toggle {
                trace,
                index,
                respond_to,
            } => {
                debug!(trace_id = %trace, index, "Toggling todo status");
                let _ = respond_to.send(self.todos.toggle(index));
            }
        }
    }
}
