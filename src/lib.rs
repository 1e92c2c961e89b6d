//! # Bot Forge
//!
//! On-demand generation of AI-controlled raid participants with a shared
//! batch cache.
//!
//! Bot profiles are expensive to synthesize, so requests are decomposed into
//! per-(role, difficulty) jobs and served from pre-generated batches: a
//! cache miss generates a full batch sized from configuration, and every
//! later request for the same pair drains the pool one profile at a time.
//! The caches are shared across all sessions on the process, amortizing
//! generation cost between concurrent raids.
//!
//! ## Architecture
//!
//! - [`generation`]: the orchestrator, PMC conversion sampling, and the
//!   external generator seams
//! - [`cache`]: the shared batch cache and the last-dispatched snapshot
//! - [`difficulty`]: settings resolution with raid overrides and faction
//!   branching
//! - [`raid`]: session raid-configuration context and the map bot-cap
//!   resolver
//! - [`config`]: the read-only configuration surface with startup validation
//! - [`bot`]: profile and generation parameter models
//!
//! ## Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use bot_forge::bot::{BotProfile, GenerationParameters};
//! use bot_forge::generation::{PlayerLevels, ProfileGenerator};
//! use bot_forge::{
//!     BotCondition, GenerateBotsRequest, GenerationCache, GenerationManager, SnapshotCache,
//!     SpawnConfig,
//! };
//!
//! struct Generator;
//!
//! #[async_trait::async_trait]
//! impl ProfileGenerator for Generator {
//!     async fn generate_batch(
//!         &self,
//!         _session_id: &str,
//!         details: &GenerationParameters,
//!     ) -> anyhow::Result<Vec<BotProfile>> {
//!         Ok((0..details.count_to_generate)
//!             .map(|i| BotProfile::new(&format!("Forge_{i}"), details))
//!             .collect())
//!     }
//! }
//!
//! struct Levels;
//!
//! impl PlayerLevels for Levels {
//!     fn level(&self, _session_id: &str) -> Option<u16> {
//!         Some(23)
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = SpawnConfig::default();
//!     config.validate()?;
//!
//!     let manager = GenerationManager::new(
//!         Arc::new(config),
//!         Arc::new(Generator),
//!         Arc::new(Levels),
//!         Arc::new(GenerationCache::new()),
//!         Arc::new(SnapshotCache::new()),
//!     );
//!
//!     let request = GenerateBotsRequest {
//!         conditions: vec![BotCondition::new("assault", "normal")],
//!     };
//!     let bots = manager.generate("session", &request).await?;
//!     println!("Dispatched {}", bots[0].nickname);
//!     Ok(())
//! }
//! ```

/// Bot profile and parameter models.
pub mod bot;
pub use bot::{BotProfile, GenerationParameters, Side};

/// Shared batch and snapshot caches.
pub mod cache;
pub use cache::{CacheError, CacheKey, CacheResult, GenerationCache, SnapshotCache};

/// Read-only configuration surface.
pub mod config;
pub use config::{ChanceRange, ConfigError, ConfigResult, PmcConfig, SpawnConfig};

/// Difficulty settings resolution.
pub mod difficulty;
pub use difficulty::{DifficultyProvider, DifficultyResolver, DifficultySettings};

/// Bot generation orchestration.
pub mod generation;
pub use generation::{
    BotCondition, BrainTypes, GenerateBotsRequest, GenerationError, GenerationManager,
    GenerationResult, PlayerLevels, PmcConverter, ProfileGenerator,
};

/// Session raid-configuration context and cap resolution.
pub mod raid;
pub use raid::{CapResolver, RaidConfiguration, RaidContext, WaveSettings};
