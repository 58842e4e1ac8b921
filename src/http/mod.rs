//! HTTP boundary: thin translation of requests into actor calls.
//!
//! Each handler resolves its inputs, calls the actor through [`TodoClient`],
//! triggers a save on every mutation, and maps errors onto status codes:
//! 400 for an invalid index or unusable id, 405 for a wrong method (axum's
//! method routers), 500 when persisting a write fails.
//!
//! Middleware attaches a fresh [`TraceId`] to every request; handlers pass
//! it to every downstream call.

use crate::actor::{ClientError, TodoClient};
use crate::model::{Todo, TodoList};
use crate::storage::{StorageError, TodoStore};
use crate::trace::TraceId;
use axum::{
    extract::{Query, Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Extension, Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::{error, info};

/// Shared handler state: the actor client plus the store every write path
/// flushes to.
#[derive(Clone)]
pub struct AppState {
    pub client: TodoClient,
    pub store: Arc<dyn TodoStore>,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/create", post(create))
        .route("/get", get(get_one))
        .route("/update", post(update))
        .route("/delete", delete(delete_one))
        .route("/toggle", post(toggle))
        .route("/list", get(list))
        .layer(middleware::from_fn(with_trace))
        .with_state(state)
}

/// Generates a fresh trace id per request and stashes it as an extension
/// so handlers can thread it through their downstream calls.
async fn with_trace(mut req: Request, next: Next) -> Response {
    let trace = TraceId::new();
    info!(
        trace_id = %trace,
        method = %req.method(),
        path = %req.uri().path(),
        "Received request"
    );
    req.extensions_mut().insert(trace);
    next.run(req).await
}

/// Handler-level failures, mapped onto HTTP responses.
enum ApiError {
    BadRequest(String),
    Actor(ClientError),
    Persistence(StorageError),
}

impl From<ClientError> for ApiError {
    fn from(err: ClientError) -> Self {
        ApiError::Actor(err)
    }
}

impl From<StorageError> for ApiError {
    fn from(err: StorageError) -> Self {
        ApiError::Persistence(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::Actor(ClientError::Todo(err)) => {
                (StatusCode::BAD_REQUEST, err.to_string())
            }
            ApiError::Actor(err) => {
                error!(error = %err, "Actor unavailable");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal error".into())
            }
            ApiError::Persistence(err) => {
                error!(error = %err, "Failed to persist changes");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "failed to persist changes".into(),
                )
            }
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Snapshots the current list and writes it to the store. Called after
/// every successful mutation; not transactional with the mutation itself.
async fn save(state: &AppState, trace: &TraceId) -> Result<(), ApiError> {
    let todos = state.client.get_all(trace).await?;
    state.store.save(trace, &todos).await?;
    Ok(())
}

/// Converts a signed id from a JSON body into a list index.
fn to_index(id: i64) -> Result<usize, ApiError> {
    usize::try_from(id).map_err(|_| ApiError::BadRequest("invalid id".into()))
}

#[derive(Deserialize)]
struct CreateBody {
    description: String,
}

#[derive(Deserialize)]
struct UpdateBody {
    id: i64,
    description: String,
}

#[derive(Deserialize)]
struct ToggleBody {
    id: i64,
}

#[derive(Deserialize)]
struct IdQuery {
    id: usize,
}

async fn create(
    State(state): State<AppState>,
    Extension(trace): Extension<TraceId>,
    Json(body): Json<CreateBody>,
) -> Result<Json<serde_json::Value>, ApiError> {
    state.client.add(&trace, body.description).await?;
    save(&state, &trace).await?;
    Ok(Json(json!({ "status": "created" })))
}

async fn get_one(
    State(state): State<AppState>,
    Extension(trace): Extension<TraceId>,
    Query(query): Query<IdQuery>,
) -> Result<Json<Todo>, ApiError> {
    let todo = state.client.get(&trace, query.id).await?;
    Ok(Json(todo))
}

async fn update(
    State(state): State<AppState>,
    Extension(trace): Extension<TraceId>,
    Json(body): Json<UpdateBody>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let index = to_index(body.id)?;
    state.client.edit(&trace, index, body.description).await?;
    save(&state, &trace).await?;
    Ok(Json(json!({ "status": "updated" })))
}

async fn delete_one(
    State(state): State<AppState>,
    Extension(trace): Extension<TraceId>,
    Query(query): Query<IdQuery>,
) -> Result<Json<serde_json::Value>, ApiError> {
    state.client.delete(&trace, query.id).await?;
    save(&state, &trace).await?;
    Ok(Json(json!({ "status": "deleted" })))
}

async fn toggle(
    State(state): State<AppState>,
    Extension(trace): Extension<TraceId>,
    Json(body): Json<ToggleBody>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let index = to_index(body.id)?;
    state.client.toggle(&trace, index).await?;
    save(&state, &trace).await?;
    Ok(Json(json!({ "status": "toggled" })))
}

async fn list(
    State(state): State<AppState>,
    Extension(trace): Extension<TraceId>,
) -> Result<Json<TodoList>, ApiError> {
    let todos = state.client.get_all(&trace).await?;
    Ok(Json(todos))
}
