//! Raid configuration models.

use serde::{Deserialize, Serialize};

/// Difficulty dropdown sentinel meaning "use the requested difficulty"
pub const DIFFICULTY_AS_ONLINE: &str = "asonline";

/// Wave settings chosen on the pre-raid screen
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaveSettings {
    /// Difficulty dropdown value: "asonline", "random", or a tier name
    pub bot_difficulty: String,
}

/// Raid settings submitted by a client when a raid is configured
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RaidConfiguration {
    /// Map the raid takes place on
    pub location: String,

    /// Wave settings from the pre-raid screen
    pub wave_settings: WaveSettings,
}

impl RaidConfiguration {
    pub fn new(location: &str, bot_difficulty: &str) -> Self {
        Self {
            location: location.to_string(),
            wave_settings: WaveSettings {
                bot_difficulty: bot_difficulty.to_string(),
            },
        }
    }
}
