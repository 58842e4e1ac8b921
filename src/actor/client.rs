//! Caller-side handle for the todo actor.

use crate::actor::{ClientError, TodoRequest};
use crate::model::{Todo, TodoList};
use crate::trace::TraceId;
use tokio::sync::{mpsc, oneshot};

/// Type-safe handle over the actor's inbox.
///
/// Cheap to clone; every HTTP handler and the CLI share clones of one
/// client. Each method builds a request with a fresh reply channel, sends
/// it, and awaits the reply — the only blocking point in the system.
/// Callers that need a deadline can wrap any call in
/// `tokio::time::timeout`; an abandoned reply is simply never read.
#[derive(Clone)]
pub struct TodoClient {
    sender: mpsc::Sender<TodoRequest>,
}

impl TodoClient {
    pub(crate) fn new(sender: mpsc::Sender<TodoRequest>) -> Self {
        Self { sender }
    }

    pub async fn add(
        &self,
        trace: &TraceId,
        description: impl Into<String>,
    ) -> Result<(), ClientError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(TodoRequest::Add {
                trace: trace.clone(),
                description: description.into(),
                respond_to,
            })
            .await
            .map_err(|_| ClientError::ActorClosed)?;
        response.await.map_err(|_| ClientError::ActorDropped)
    }

    pub async fn get(&self, trace: &TraceId, index: usize) -> Result<Todo, ClientError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(TodoRequest::Get {
                trace: trace.clone(),
                index,
                respond_to,
            })
            .await
            .map_err(|_| ClientError::ActorClosed)?;
        let reply = response.await.map_err(|_| ClientError::ActorDropped)?;
        Ok(reply?)
    }

    pub async fn get_all(&self, trace: &TraceId) -> Result<TodoList, ClientError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(TodoRequest::GetAll {
                trace: trace.clone(),
                respond_to,
            })
            .await
            .map_err(|_| ClientError::ActorClosed)?;
        response.await.map_err(|_| ClientError::ActorDropped)
    }

    pub async fn edit(
        &self,
        trace: &TraceId,
        index: usize,
        description: impl Into<String>,
    ) -> Result<(), ClientError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(TodoRequest::Edit {
                trace: trace.clone(),
                index,
                description: description.into(),
                respond_to,
            })
            .await
            .map_err(|_| ClientError::ActorClosed)?;
        let reply = response.await.map_err(|_| ClientError::ActorDropped)?;
        Ok(reply?)
    }

    pub async fn delete(&self, trace: &TraceId, index: usize) -> Result<(), ClientError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(TodoRequest::Delete {
                trace: trace.clone(),
                index,
                respond_to,
            })
            .await
            .map_err(|_| ClientError::ActorClosed)?;
        let reply = response.await.map_err(|_| ClientError::ActorDropped)?;
        Ok(reply?)
    }

    pub async fn toggle(&self, trace: &TraceId, index: usize) -> Result<(), ClientError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(TodoRequest::Toggle {
                trace: trace.clone(),
                index,
                respond_to,
            })
            .await
            .map_err(|_| ClientError::ActorClosed)?;
        let reply = response.await.map_err(|_| ClientError::ActorDropped)?;
        Ok(reply?)
    }
}
