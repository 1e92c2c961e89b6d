//! Bot generation orchestration over the shared batch cache.

use std::sync::Arc;

use crate::bot::{BotProfile, GenerationParameters, Side};
use crate::cache::{CacheKey, GenerationCache, SnapshotCache};
use crate::config::SpawnConfig;

use super::errors::{GenerationError, GenerationResult};
use super::generator::{PlayerLevels, ProfileGenerator};
use super::models::{BotCondition, BrainTypes, GenerateBotsRequest};
use super::pmc::PmcConverter;

/// Batch size reported when a role has no preset batch entry
const FALLBACK_PRESET_BATCH: u32 = 30;

/// Player level assumed for sessions without a known profile
const FALLBACK_PLAYER_LEVEL: u16 = 1;

/// Orchestrates on-demand bot generation over the shared batch cache.
///
/// A request decomposes into one job per condition. Each job walks the
/// condition's batch count, samples PMC conversion per unit, fills the cache
/// for every key it touches, and draws a single profile for the response;
/// the remaining profiles stay pooled for future requests from any session.
pub struct GenerationManager {
    config: Arc<SpawnConfig>,
    generator: Arc<dyn ProfileGenerator>,
    levels: Arc<dyn PlayerLevels>,
    cache: Arc<GenerationCache>,
    snapshots: Arc<SnapshotCache>,
    converter: PmcConverter,
}

impl GenerationManager {
    pub fn new(
        config: Arc<SpawnConfig>,
        generator: Arc<dyn ProfileGenerator>,
        levels: Arc<dyn PlayerLevels>,
        cache: Arc<GenerationCache>,
        snapshots: Arc<SnapshotCache>,
    ) -> Self {
        let converter = PmcConverter::new(config.clone());
        Self {
            config,
            generator,
            levels,
            cache,
            snapshots,
            converter,
        }
    }

    /// Generate one profile per condition, filling the batch cache along the
    /// way.
    ///
    /// Conditions are processed strictly in order; later units of a
    /// condition rely on earlier units having already filled the cache for
    /// their key.
    pub async fn generate(
        &self,
        session_id: &str,
        request: &GenerateBotsRequest,
    ) -> GenerationResult<Vec<BotProfile>> {
        let player_level = self
            .levels
            .level(session_id)
            .unwrap_or(FALLBACK_PLAYER_LEVEL);

        let mut bots = Vec::with_capacity(request.conditions.len());
        for condition in &request.conditions {
            let bot = self
                .generate_condition(session_id, condition, player_level)
                .await?;

            if request.conditions.len() == 1 {
                // A single-condition request signals the bot is about to be
                // dispatched into the raid; exported for narrative features
                self.snapshots.record(session_id, bot.clone()).await;
            }

            bots.push(bot);
        }

        Ok(bots)
    }

    async fn generate_condition(
        &self,
        session_id: &str,
        condition: &BotCondition,
        player_level: u16,
    ) -> GenerationResult<BotProfile> {
        let params = self.build_parameters(condition, player_level)?;

        let mut key = CacheKey::new(params.requested_role(), &params.difficulty);
        for _ in 0..params.count_to_generate {
            let mut details = params.clone();
            let converted = self.converter.maybe_convert(&mut details);

            // The key addresses what the unit effectively became: the PMC
            // role after a successful conversion, otherwise the label the
            // condition asked for
            let effective_role = if converted {
                details.role.as_str()
            } else {
                details.requested_role()
            };
            key = CacheKey::new(effective_role, &details.difficulty);

            if !self.cache.has_batch(&key).await {
                let batch = self.generator.generate_batch(session_id, &details).await?;
                self.cache.store(key.clone(), batch).await;
            }
        }

        Ok(self.cache.draw(&key).await?)
    }

    /// Build per-condition parameters, resolving event and faction-proxy
    /// role labels.
    fn build_parameters(
        &self,
        condition: &BotCondition,
        player_level: u16,
    ) -> GenerationResult<GenerationParameters> {
        let count_to_generate = self
            .config
            .preset_batch
            .get(&condition.role)
            .copied()
            .ok_or_else(|| GenerationError::MissingPresetBatch(condition.role.clone()))?;

        let mut params = GenerationParameters {
            is_pmc: false,
            side: Side::Scav,
            role: condition.role.clone(),
            event_role: None,
            player_level,
            level_delta_max: self.config.pmc.level_delta_max,
            count_to_generate,
            difficulty: condition.difficulty.clone(),
            is_player_scav: false,
        };

        // Seasonal labels generate as their base role and keep the original
        // label for identity restoration
        if condition.role.to_lowercase().contains("event") {
            let base_role = self
                .config
                .event_base_roles
                .get(&condition.role.to_lowercase())
                .cloned()
                .ok_or_else(|| GenerationError::UnknownEventRole(condition.role.clone()))?;
            params.event_role = Some(condition.role.clone());
            params.role = base_role;
        }

        // Custom map waves can request faction-proxy roles directly
        if let Some(side) = self.converter.side_for_role(&condition.role) {
            params.is_pmc = true;
            params.side = side;
        }

        Ok(params)
    }

    /// Number of profile varieties to generate for a role.
    ///
    /// The generic assault-group label shares the assault entry. An unknown
    /// role logs a warning and reports the documented default.
    pub fn preset_generation_limit(&self, role: &str) -> u32 {
        let lookup = if role == "assaultGroup" { "assault" } else { role };

        match self.config.preset_batch.get(lookup) {
            Some(limit) => *limit,
            None => {
                log::warn!(
                    "No preset batch size for role {}, defaulting to {}",
                    role,
                    FALLBACK_PRESET_BATCH
                );
                FALLBACK_PRESET_BATCH
            }
        }
    }

    /// Brain types used by spawned bots
    pub fn brain_types(&self) -> BrainTypes {
        BrainTypes {
            pmc: self.config.pmc.brain_type.clone(),
            assault: self.config.assault_brain_type.clone(),
        }
    }
}
