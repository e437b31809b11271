use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;

use super::conversation_tracker::ConversationStatus;

#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MetricsData {
    pub new_conversations: u64,
    pub ongoing_conversations: u64,
    pub rejected_requests: u64,
    pub upstream_failures: u64,
    pub fallback_replies: u64,
}

#[derive(Debug, Clone)]
pub struct MetricsManager {
    inner: Arc<RwLock<MetricsData>>,
}

impl Default for MetricsManager {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsManager {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MetricsData::default())),
        }
    }

    pub async fn record_conversation(&self, status: ConversationStatus) {
        let mut data = self.inner.write().await;
        match status {
            ConversationStatus::New => data.new_conversations += 1,
            ConversationStatus::Ongoing => data.ongoing_conversations += 1,
        }
    }

    pub async fn increment_rejected(&self) {
        self.inner.write().await.rejected_requests += 1;
    }

    pub async fn increment_upstream_failure(&self) {
        self.inner.write().await.upstream_failures += 1;
    }

    pub async fn increment_fallback(&self) {
        self.inner.write().await.fallback_replies += 1;
    }

    pub async fn get_metrics(&self) -> MetricsData {
        self.inner.read().await.clone()
    }
}
