//! Bot difficulty resolution with raid overrides and faction branching.

use std::sync::Arc;

use crate::bot::Side;
use crate::config::SpawnConfig;
use crate::raid::{DIFFICULTY_AS_ONLINE, RaidContext};

use super::models::{DifficultySettings, tier_from_dropdown};
use super::provider::DifficultyProvider;

/// Resolves difficulty settings for a bot type, honoring the raid's UI
/// difficulty override and the PMC faction special cases.
pub struct DifficultyResolver {
    config: Arc<SpawnConfig>,
    context: Arc<RaidContext>,
    provider: Arc<dyn DifficultyProvider>,
}

impl DifficultyResolver {
    pub fn new(
        config: Arc<SpawnConfig>,
        context: Arc<RaidContext>,
        provider: Arc<dyn DifficultyProvider>,
    ) -> Self {
        Self {
            config,
            context,
            provider,
        }
    }

    /// Difficulty settings for `bot_type` at `difficulty`, adjusted so
    /// ordinary hostiles engage player-aligned PMCs.
    ///
    /// A missing raid configuration is logged and resolution continues with
    /// the caller-supplied difficulty.
    pub async fn bot_difficulty(&self, bot_type: &str, difficulty: &str) -> DifficultySettings {
        let mut difficulty = difficulty.to_lowercase();

        match self.context.latest().await {
            Some(raid) => {
                // The pre-raid dropdown overrides the requested tier for
                // every type in the raid unless left on "asonline"
                let dropdown = raid.wave_settings.bot_difficulty.to_lowercase();
                if dropdown != DIFFICULTY_AS_ONLINE {
                    difficulty = tier_from_dropdown(&dropdown);
                }
            }
            None => {
                log::error!(
                    "No raid configuration stored, resolving {} difficulty as requested",
                    bot_type
                );
            }
        }

        let pmc = &self.config.pmc;
        let lowercased_type = bot_type.to_lowercase();

        // An exact faction match always takes the faction-aware path
        if lowercased_type == pmc.blufor_type.to_lowercase() {
            return self.provider.faction_settings(
                Side::Blufor,
                &difficulty,
                &pmc.blufor_type,
                &pmc.opfor_type,
            );
        }
        if lowercased_type == pmc.opfor_type.to_lowercase() {
            return self.provider.faction_settings(
                Side::Opfor,
                &difficulty,
                &pmc.blufor_type,
                &pmc.opfor_type,
            );
        }

        let mut settings = self.provider.settings(bot_type, &difficulty);

        // Scripted/event bots on the exemption list stay neutral to PMCs
        let exempt = self
            .config
            .pmc_hostility_exempt
            .iter()
            .any(|t| t.eq_ignore_ascii_case(bot_type));
        if !exempt {
            settings.add_enemy_types(
                &[pmc.blufor_type.clone(), pmc.opfor_type.clone()],
                &lowercased_type,
            );
        }

        settings
    }

    /// Base behavior settings shared by all bot types
    pub fn core_difficulty(&self) -> serde_json::Value {
        self.provider.core_settings()
    }
}
