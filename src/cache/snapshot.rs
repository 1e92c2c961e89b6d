//! Last-dispatched-bot snapshot cache.

use std::collections::HashMap;

use tokio::sync::RwLock;

use crate::bot::BotProfile;

/// Most recently dispatched profile per session.
///
/// Written whenever a request asks for exactly one bot, the signal that the
/// bot is about to spawn. Narrative features outside this crate read the
/// snapshot; generation itself never does.
#[derive(Debug, Default)]
pub struct SnapshotCache {
    dispatched: RwLock<HashMap<String, BotProfile>>,
}

impl SnapshotCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the profile just dispatched for the session, replacing any
    /// previous snapshot
    pub async fn record(&self, session_id: &str, profile: BotProfile) {
        self.dispatched
            .write()
            .await
            .insert(session_id.to_string(), profile);
    }

    /// Last profile dispatched for the session
    pub async fn last_dispatched(&self, session_id: &str) -> Option<BotProfile> {
        self.dispatched.read().await.get(session_id).cloned()
    }
}
