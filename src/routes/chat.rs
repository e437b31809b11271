use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde::{Deserialize, Serialize};
use tracing::{Instrument, info_span};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    message::{ChatRequest, ChatResponse},
    services::{chatbot::generate_reply, metrics_manager::MetricsData},
    state::SharedState,
};

pub async fn chat_handler(
    State(state): State<SharedState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> AppResult<Json<ChatResponse>> {
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            state.metrics.increment_rejected().await;
            return Err(AppError::Validation(rejection.body_text()));
        }
    };

    let span = info_span!(
        "chat",
        request_id = %Uuid::new_v4(),
        user_id = %request.user_id(),
    );

    // Dropping this future on client disconnect also drops the upstream call.
    let reply = generate_reply(&state, &request).instrument(span).await?;

    Ok(Json(ChatResponse { reply }))
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MetricsResponse {
    #[serde(flatten)]
    pub counters: MetricsData,
    pub tracked_users: usize,
}

pub async fn get_metrics_handler(State(state): State<SharedState>) -> Json<MetricsResponse> {
    Json(MetricsResponse {
        counters: state.metrics.get_metrics().await,
        tracked_users: state.tracker.len().await,
    })
}
