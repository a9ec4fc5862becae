//! # Mock Service
//!
//! **INTERNAL USE ONLY**: This crate exists solely to provide an HTTP mock of
//! the sandbar API for integration testing the `sandbar` client. It is not
//! intended for production use.
//!
//! A [`MockApi`] is a set of canned JSON responses keyed by request path.
//! [`MockApi::serve`] binds an ephemeral local port and returns a
//! [`MockServer`] carrying the base URL to point the client at, plus a
//! record of every request received for assertions.

use axum::Router;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, Uri, header};
use axum::response::{IntoResponse, Json};
use serde_json::{Value, json};
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

#[derive(Debug, Default)]
pub struct MockApi {
    routes: HashMap<String, VecDeque<(u16, Value)>>,
}

impl MockApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a 200 response for `path`. Registering the same path twice
    /// queues responses in order; the last one repeats.
    pub fn on(self, path: &str, response: Value) -> Self {
        self.on_status(path, 200, response)
    }

    /// Registers a response for `path` with an explicit status code.
    pub fn on_status(mut self, path: &str, status: u16, response: Value) -> Self {
        self.routes
            .entry(path.to_string())
            .or_default()
            .push_back((status, response));
        self
    }

    /// Binds an ephemeral port on localhost and serves the configured
    /// responses until the returned [`MockServer`] is dropped.
    pub async fn serve(self) -> MockServer {
        let state = Arc::new(Shared {
            routes: Mutex::new(self.routes),
            requests: Mutex::new(Vec::new()),
        });
        let app = Router::new()
            .fallback(handle)
            .with_state(Arc::clone(&state));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind the mock listener");
        let addr = listener
            .local_addr()
            .expect("failed to read the mock listener address");
        let handle = tokio::spawn(async move {
            axum::serve(listener, app)
                .await
                .expect("mock server failed");
        });
        MockServer {
            base_url: format!("http://{addr}"),
            state,
            handle,
        }
    }
}

/// One request as the mock received it.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub path: String,
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub body: Value,
}

pub struct MockServer {
    pub base_url: String,
    state: Arc<Shared>,
    handle: tokio::task::JoinHandle<()>,
}

impl MockServer {
    /// Every request received so far, in arrival order.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().expect("lock poisoned").clone()
    }
}

impl Drop for MockServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[derive(Debug)]
struct Shared {
    routes: Mutex<HashMap<String, VecDeque<(u16, Value)>>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

async fn handle(
    State(state): State<Arc<Shared>>,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> impl IntoResponse {
    let path = uri.path().to_string();
    let header_value = |name: header::HeaderName| {
        headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string)
    };
    state.requests.lock().expect("lock poisoned").push(RecordedRequest {
        path: path.clone(),
        authorization: header_value(header::AUTHORIZATION),
        content_type: header_value(header::CONTENT_TYPE),
        body: serde_json::from_str(&body).unwrap_or(Value::Null),
    });

    let mut routes = state.routes.lock().expect("lock poisoned");
    let Some(queue) = routes.get_mut(&path) else {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({ "message": format!("no mock response registered for {path}") })),
        );
    };
    // Consume queued responses until one remains, then keep repeating it.
    let (status, value) = if queue.len() > 1 {
        queue.pop_front().expect("queue checked non-empty")
    } else {
        queue
            .front()
            .cloned()
            .unwrap_or((500, json!({ "message": "mock response queue is empty" })))
    };
    let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(value))
}
