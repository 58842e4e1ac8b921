//! Runtime orchestration: wires storage, actor, and HTTP server together.
//!
//! [`TodoSystem`] owns the system lifecycle:
//! 1. load persisted todos (or start empty),
//! 2. spawn the actor seeded with them,
//! 3. optionally serve HTTP until Ctrl-C,
//! 4. flush the final state back to the file and wait for the actor task.

use crate::actor::{TodoActor, TodoClient};
use crate::http::{build_router, AppState};
use crate::model::TodoList;
use crate::storage::{JsonFileStore, TodoStore};
use crate::trace::TraceId;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

/// Inbox depth; up to this many requests queue before senders back-pressure.
const INBOX_BUFFER: usize = 32;

pub struct TodoSystem {
    pub client: TodoClient,
    pub store: Arc<JsonFileStore>,
    handle: JoinHandle<()>,
}

impl TodoSystem {
    /// Loads persisted todos from `path` and spawns the actor seeded with
    /// them. A missing or unreadable file logs a warning and starts empty.
    pub async fn start(trace: &TraceId, path: impl Into<PathBuf>) -> Self {
        let store = Arc::new(JsonFileStore::new(path));
        let seed = match store.load(trace).await {
            Ok(todos) => todos,
            Err(err) => {
                warn!(trace_id = %trace, error = %err, "Could not load todos, starting empty");
                TodoList::new()
            }
        };

        let (actor, client) = TodoActor::new(INBOX_BUFFER, seed);
        let handle = tokio::spawn(actor.run());

        Self {
            client,
            store,
            handle,
        }
    }

    /// Serves the HTTP API until Ctrl-C.
    pub async fn serve(&self, port: u16) -> std::io::Result<()> {
        let state = AppState {
            client: self.client.clone(),
            store: self.store.clone() as Arc<dyn TodoStore>,
        };
        let router = build_router(state);

        let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
        info!(port, "Starting HTTP server");
        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }

    /// Flushes the current list to the file, then stops the actor by
    /// dropping the last client and waits for its task to finish.
    pub async fn shutdown(self, trace: &TraceId) {
        info!(trace_id = %trace, "Shutting down and saving todos");

        match self.client.get_all(trace).await {
            Ok(todos) => {
                if let Err(err) = self.store.save(trace, &todos).await {
                    error!(trace_id = %trace, error = %err, "Failed to save todos on shutdown");
                }
            }
            Err(err) => error!(trace_id = %trace, error = %err, "Could not snapshot todos"),
        }

        // Dropping the last sender ends the actor's recv loop.
        drop(self.client);
        if let Err(err) = self.handle.await {
            error!(error = %err, "Actor task failed");
        }
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Interrupt received"),
        Err(err) => error!(error = %err, "Failed to listen for interrupt"),
    }
}
