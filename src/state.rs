// src/state.rs
use std::sync::Arc;

use crate::config::Config;
use crate::services::conversation_tracker::ConversationTracker;
use crate::services::gemini::GeminiClient;
use crate::services::metrics_manager::MetricsManager;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub tracker: ConversationTracker,
    pub metrics: MetricsManager,
    pub gemini: GeminiClient,
}

impl AppState {
    pub fn new(tracker: ConversationTracker, gemini: GeminiClient) -> Self {
        Self {
            tracker,
            metrics: MetricsManager::new(),
            gemini,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            ConversationTracker::new(config.conversation_ttl),
            GeminiClient::new(&config.gemini_api_url, &config.api_key),
        )
    }
}
