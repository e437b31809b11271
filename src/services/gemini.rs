//! Client for the Gemini `generateContent` endpoint.
//!
//! One prompt in, one text out. No retries and no timeout beyond the
//! `reqwest` defaults.

use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::error::UpstreamError;

const REPLY_POINTER: &str = "/candidates/0/content/parts/0/text";

#[derive(Serialize)]
struct GenerateContentRequest<'a> {
    contents: [GeminiContent<'a>; 1],
}

#[derive(Serialize)]
struct GeminiContent<'a> {
    parts: [GeminiTextPart<'a>; 1],
}

#[derive(Serialize)]
struct GeminiTextPart<'a> {
    text: &'a str,
}

impl<'a> GenerateContentRequest<'a> {
    fn new(prompt: &'a str) -> Self {
        Self {
            contents: [GeminiContent {
                parts: [GeminiTextPart { text: prompt }],
            }],
        }
    }
}

#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

impl GeminiClient {
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        }
    }

    /// Send `prompt` and return the first candidate's first text part.
    ///
    /// `Ok(None)` means the call succeeded but the payload carried no usable
    /// text.
    pub async fn generate(&self, prompt: &str) -> Result<Option<String>, UpstreamError> {
        let response = self
            .client
            .post(&self.endpoint)
            .query(&[("key", self.api_key.as_str())])
            .json(&GenerateContentRequest::new(prompt))
            .send()
            .await
            .map_err(UpstreamError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(UpstreamError::Status { status, body });
        }

        let data: Value = response.json().await.map_err(UpstreamError::Decode)?;
        debug!(%status, "upstream replied");
        Ok(extract_reply(&data))
    }
}

/// `candidates[0].content.parts[0].text`, if present and non-empty.
pub fn extract_reply(data: &Value) -> Option<String> {
    data.pointer(REPLY_POINTER)
        .and_then(Value::as_str)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}
