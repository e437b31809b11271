#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    Json, Router,
    body::Body,
    extract::{Query, State},
    http::{Request, StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use medinova_backend::{
    routes::create_router,
    services::{conversation_tracker::ConversationTracker, gemini::GeminiClient},
    state::{AppState, SharedState},
};
use serde_json::{Value, json};
use tower::util::ServiceExt;

/// Stand-in for the Gemini endpoint. Records every prompt and API key it sees.
#[derive(Clone)]
pub struct FakeUpstream {
    pub url: String,
    prompts: Arc<Mutex<Vec<String>>>,
    keys: Arc<Mutex<Vec<String>>>,
}

#[derive(Clone)]
struct UpstreamState {
    status: StatusCode,
    body: String,
    prompts: Arc<Mutex<Vec<String>>>,
    keys: Arc<Mutex<Vec<String>>>,
}

impl FakeUpstream {
    pub async fn replying(text: &str) -> Self {
        Self::spawn(StatusCode::OK, gemini_body(text).to_string()).await
    }

    pub async fn spawn(status: StatusCode, body: impl Into<String>) -> Self {
        let prompts = Arc::new(Mutex::new(Vec::new()));
        let keys = Arc::new(Mutex::new(Vec::new()));
        let state = UpstreamState {
            status,
            body: body.into(),
            prompts: prompts.clone(),
            keys: keys.clone(),
        };

        let app = Router::new()
            .route("/generate", post(generate))
            .with_state(state);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            url: format!("http://{addr}/generate"),
            prompts,
            keys,
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    pub fn keys(&self) -> Vec<String> {
        self.keys.lock().unwrap().clone()
    }
}

async fn generate(
    State(state): State<UpstreamState>,
    Query(query): Query<HashMap<String, String>>,
    Json(payload): Json<Value>,
) -> impl IntoResponse {
    let prompt = payload
        .pointer("/contents/0/parts/0/text")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    state.prompts.lock().unwrap().push(prompt);
    state
        .keys
        .lock()
        .unwrap()
        .push(query.get("key").cloned().unwrap_or_default());

    (
        state.status,
        [(header::CONTENT_TYPE, "application/json")],
        state.body.clone(),
    )
}

pub fn gemini_body(text: &str) -> Value {
    json!({
        "candidates": [{ "content": { "parts": [{ "text": text }], "role": "model" } }]
    })
}

/// A URL nothing listens on.
pub async fn unreachable_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/generate")
}

pub fn test_state(upstream_url: &str) -> SharedState {
    Arc::new(AppState::new(
        ConversationTracker::new(Duration::from_secs(60)),
        GeminiClient::new(upstream_url, "test-key"),
    ))
}

pub fn test_app(state: SharedState) -> Router {
    create_router("public").with_state(state)
}

pub async fn post_chat(app: &Router, body: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/chat")
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);
    (status, json)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, body_bytes.to_vec())
}
