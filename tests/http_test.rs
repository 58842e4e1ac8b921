//! HTTP surface tests: each route translated through the router into actor
//! calls, with a real store behind the write paths.

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::sync::Arc;
use tempfile::TempDir;
use todo_actor::actor::TodoActor;
use todo_actor::http::{build_router, AppState};
use todo_actor::model::TodoList;
use todo_actor::storage::{JsonFileStore, StorageError, TodoStore};
use todo_actor::trace::TraceId;
use tower::ServiceExt;

struct TestApp {
    router: Router,
    store: Arc<JsonFileStore>,
    _dir: TempDir,
}

fn test_app() -> TestApp {
    let dir = TempDir::new().unwrap();
    let store = Arc::new(JsonFileStore::new(dir.path().join("todos.json")));
    let (actor, client) = TodoActor::new(32, TodoList::new());
    tokio::spawn(actor.run());
    let router = build_router(AppState {
        client,
        store: store.clone(),
    });
    TestApp {
        router,
        store,
        _dir: dir,
    }
}

fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn bare_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, body)
}

#[tokio::test]
async fn create_then_list_round_trips() {
    let app = test_app();

    let (status, body) = send(
        &app.router,
        json_request(Method::POST, "/create", json!({ "description": "buy milk" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "created");

    let (status, body) = send(&app.router, bare_request(Method::GET, "/list")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["description"], "buy milk");
    assert_eq!(body[0]["status"], "Not started");
}

#[tokio::test]
async fn get_returns_the_todo_at_the_index() {
    let app = test_app();
    send(
        &app.router,
        json_request(Method::POST, "/create", json!({ "description": "first" })),
    )
    .await;

    let (status, body) = send(&app.router, bare_request(Method::GET, "/get?id=0")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["description"], "first");
}

#[tokio::test]
async fn get_rejects_out_of_range_and_unparseable_ids() {
    let app = test_app();

    let (status, _) = send(&app.router, bare_request(Method::GET, "/get?id=5")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app.router, bare_request(Method::GET, "/get?id=abc")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn update_edits_in_place_and_persists() {
    let app = test_app();
    send(
        &app.router,
        json_request(Method::POST, "/create", json!({ "description": "old" })),
    )
    .await;

    let (status, body) = send(
        &app.router,
        json_request(
            Method::POST,
            "/update",
            json!({ "id": 0, "description": "new" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "updated");

    let raw = tokio::fs::read_to_string(app.store.path()).await.unwrap();
    assert!(raw.contains("new"));
    assert!(!raw.contains("old"));
}

#[tokio::test]
async fn update_rejects_invalid_ids_with_400() {
    let app = test_app();

    let (status, _) = send(
        &app.router,
        json_request(
            Method::POST,
            "/update",
            json!({ "id": 3, "description": "x" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &app.router,
        json_request(
            Method::POST,
            "/update",
            json!({ "id": -1, "description": "x" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn delete_removes_and_renumbers() {
    let app = test_app();
    for description in ["A", "B", "C"] {
        send(
            &app.router,
            json_request(Method::POST, "/create", json!({ "description": description })),
        )
        .await;
    }

    let (status, body) = send(&app.router, bare_request(Method::DELETE, "/delete?id=0")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "deleted");

    let (_, body) = send(&app.router, bare_request(Method::GET, "/list")).await;
    assert_eq!(body.as_array().unwrap().len(), 2);
    assert_eq!(body[0]["description"], "B");
    assert_eq!(body[1]["description"], "C");
}

#[tokio::test]
async fn toggle_advances_the_status() {
    let app = test_app();
    send(
        &app.router,
        json_request(Method::POST, "/create", json!({ "description": "cycle" })),
    )
    .await;

    let (status, body) = send(
        &app.router,
        json_request(Method::POST, "/toggle", json!({ "id": 0 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "toggled");

    let (_, body) = send(&app.router, bare_request(Method::GET, "/get?id=0")).await;
    assert_eq!(body["status"], "Started");
}

#[tokio::test]
async fn wrong_method_is_405() {
    let app = test_app();

    let (status, _) = send(&app.router, bare_request(Method::GET, "/create")).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);

    let (status, _) = send(&app.router, bare_request(Method::POST, "/delete?id=0")).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

/// Store whose saves always fail, for exercising the 500 write path.
struct BrokenStore;

#[async_trait]
impl TodoStore for BrokenStore {
    async fn save(&self, _trace: &TraceId, _todos: &TodoList) -> Result<(), StorageError> {
        Err(StorageError::Io(std::io::Error::other("disk full")))
    }

    async fn load(&self, _trace: &TraceId) -> Result<TodoList, StorageError> {
        Ok(TodoList::new())
    }
}

#[tokio::test]
async fn persistence_failure_on_a_write_path_is_500() {
    let (actor, client) = TodoActor::new(32, TodoList::new());
    tokio::spawn(actor.run());
    let router = build_router(AppState {
        client: client.clone(),
        store: Arc::new(BrokenStore),
    });

    let (status, _) = send(
        &router,
        json_request(Method::POST, "/create", json!({ "description": "doomed" })),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    // The mutation itself still applied; only the save failed.
    let trace = TraceId::new();
    assert_eq!(client.get_all(&trace).await.unwrap().len(), 1);
}

#[tokio::test]
async fn malformed_body_never_reaches_the_actor() {
    let app = test_app();

    let request = Request::builder()
        .method(Method::POST)
        .uri("/create")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, _) = send(&app.router, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // The list is untouched.
    let (_, body) = send(&app.router, bare_request(Method::GET, "/list")).await;
    assert_eq!(body.as_array().unwrap().len(), 0);
}
