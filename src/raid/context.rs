//! Latest-value store for the active raid configuration.

use tokio::sync::RwLock;

use super::models::RaidConfiguration;

/// Shared store holding the most recently submitted raid configuration.
///
/// Resolvers read this ambient context instead of taking raid parameters
/// explicitly; a new pre-raid submission overwrites the previous value.
#[derive(Debug, Default)]
pub struct RaidContext {
    latest: RwLock<Option<RaidConfiguration>>,
}

impl RaidContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a newly submitted raid configuration
    pub async fn store(&self, config: RaidConfiguration) {
        *self.latest.write().await = Some(config);
    }

    /// Most recently stored raid configuration, if any raid was configured
    pub async fn latest(&self) -> Option<RaidConfiguration> {
        self.latest.read().await.clone()
    }

    /// Drop the stored configuration
    pub async fn clear(&self) {
        *self.latest.write().await = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn latest_value_wins() {
        let context = RaidContext::new();
        assert!(context.latest().await.is_none());

        context.store(RaidConfiguration::new("harbor", "asonline")).await;
        context.store(RaidConfiguration::new("forest", "hard")).await;

        let raid = context.latest().await.unwrap();
        assert_eq!(raid.location, "forest");
        assert_eq!(raid.wave_settings.bot_difficulty, "hard");

        context.clear().await;
        assert!(context.latest().await.is_none());
    }
}
