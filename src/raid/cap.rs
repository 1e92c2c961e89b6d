//! Map bot-cap resolution.

use std::sync::Arc;

use crate::config::{DEFAULT_MAP_CAP_KEY, SpawnConfig};

use super::context::RaidContext;

/// Resolves the maximum simultaneous bot count for the active raid's map.
pub struct CapResolver {
    config: Arc<SpawnConfig>,
    context: Arc<RaidContext>,
}

impl CapResolver {
    pub fn new(config: Arc<SpawnConfig>, context: Arc<RaidContext>) -> Self {
        Self { config, context }
    }

    /// Maximum number of bots allowed on the active raid's map.
    ///
    /// Degrades to the default entry when no raid is configured or the map
    /// has no cap of its own. The default entry is guaranteed present by
    /// startup validation.
    pub async fn bot_cap(&self) -> u32 {
        let map_name = match self.context.latest().await {
            Some(raid) => raid.location.to_lowercase(),
            None => {
                log::warn!("No raid configuration stored, using the default bot cap");
                DEFAULT_MAP_CAP_KEY.to_string()
            }
        };

        match self.config.max_bot_cap.get(&map_name) {
            Some(cap) => *cap,
            None => {
                log::warn!("No bot cap found for map {}, using the default cap", map_name);
                self.config.max_bot_cap[DEFAULT_MAP_CAP_KEY]
            }
        }
    }
}
