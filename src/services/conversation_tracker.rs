// src/services/conversation_tracker.rs
use std::{
    collections::HashMap,
    fmt::Debug,
    sync::Arc,
    time::{Duration, Instant},
};

use tokio::{sync::RwLock, task::JoinHandle};

/// Whether a message opens a conversation or continues one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConversationStatus {
    New,
    Ongoing,
}

/// Remembers which user ids have already talked to the bot.
///
/// Entries idle for longer than `ttl` count as unseen and are dropped by
/// [`ConversationTracker::purge_expired`].
#[derive(Clone)]
pub struct ConversationTracker {
    inner: Arc<RwLock<HashMap<String, Instant>>>,
    ttl: Duration,
}

impl Debug for ConversationTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConversationTracker")
            .field("ttl", &self.ttl)
            .finish()
    }
}

impl ConversationTracker {
    pub fn new(ttl: Duration) -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    /// Record a message from `user_id` and classify it.
    ///
    /// Lookup and insert happen under one write lock, so concurrent first
    /// messages from the same id yield exactly one `New`.
    pub async fn observe(&self, user_id: &str) -> ConversationStatus {
        let now = Instant::now();
        let mut guard = self.inner.write().await;
        match guard.get_mut(user_id) {
            Some(last_seen) if now.duration_since(*last_seen) < self.ttl => {
                *last_seen = now;
                ConversationStatus::Ongoing
            }
            Some(last_seen) => {
                *last_seen = now;
                ConversationStatus::New
            }
            None => {
                guard.insert(user_id.to_string(), now);
                ConversationStatus::New
            }
        }
    }

    /// Remove ids idle longer than ttl. Returns number removed.
    pub async fn purge_expired(&self) -> usize {
        let mut guard = self.inner.write().await;
        let now = Instant::now();
        let before = guard.len();
        guard.retain(|_, last_seen| now.duration_since(*last_seen) < self.ttl);
        before - guard.len()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    /// Purge expired ids every `interval` for as long as the task lives.
    pub fn spawn_sweeper(&self, interval: Duration) -> JoinHandle<()> {
        let tracker = self.clone();
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
            // First tick completes immediately.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                let removed = tracker.purge_expired().await;
                if removed > 0 {
                    tracing::debug!(removed, "purged idle conversations");
                }
            }
        })
    }
}
