// src/routes/mod.rs
pub mod chat;

use crate::state::SharedState;
use axum::{
    Router,
    routing::{get, post},
};
use chat::{chat_handler, get_metrics_handler};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub const INDEX_TEXT: &str = "Medinova backend is running";

pub fn create_router(static_dir: &str) -> Router<SharedState> {
    Router::new()
        .route("/", get(|| async { INDEX_TEXT }))
        .route("/chat", post(chat_handler))
        .route("/metrics", get(get_metrics_handler))
        .route("/health", get(|| async { "OK" }))
        .fallback_service(ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::very_permissive())
}
