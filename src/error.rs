// src/error.rs
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::message::{ChatResponse, ErrorResponse};

/// Reply sent to the client whenever the upstream call fails.
pub const APOLOGY_REPLY: &str = "Sorry, something went wrong!";

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Upstream error: {0}")]
    Upstream(#[from] UpstreamError),
}

/// Failures talking to the generative-language API.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("HTTP {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("response body is not JSON: {0}")]
    Decode(#[source] reqwest::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("API_KEY is not set")]
    MissingApiKey,

    #[error("invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(message) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse { error: message }),
            )
                .into_response(),
            AppError::Upstream(err) => {
                // Detail stays in the operator log.
                tracing::error!(error = %err, "Request Error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ChatResponse {
                        reply: APOLOGY_REPLY.to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
