// src/message.rs
use serde::{Deserialize, Serialize};

/// Identifier used when the client does not send `userId`.
pub const ANONYMOUS_USER: &str = "anonymous";

#[derive(Debug, Default, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, rename = "userId")]
    pub user_id: Option<String>,
}

impl ChatRequest {
    /// The message exactly as sent, unless missing or empty.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref().filter(|m| !m.is_empty())
    }

    pub fn user_id(&self) -> &str {
        self.user_id
            .as_deref()
            .filter(|u| !u.is_empty())
            .unwrap_or(ANONYMOUS_USER)
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub reply: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
