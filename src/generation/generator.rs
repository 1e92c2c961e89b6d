//! Seams to the external generation collaborators.

use async_trait::async_trait;

use crate::bot::{BotProfile, GenerationParameters};

/// External generator synthesizing fully-populated profile batches.
///
/// Implementations are arbitrarily expensive. The orchestrator awaits them
/// without holding any cache lock, and dropping the returned future cancels
/// the batch without leaving partial state behind.
#[async_trait]
pub trait ProfileGenerator: Send + Sync {
    /// Generate `details.count_to_generate` profiles for one condition
    async fn generate_batch(
        &self,
        session_id: &str,
        details: &GenerationParameters,
    ) -> anyhow::Result<Vec<BotProfile>>;
}

/// Source of the player level that bounds relative bot levels.
pub trait PlayerLevels: Send + Sync {
    /// Level of the player owning the session, if known
    fn level(&self, session_id: &str) -> Option<u16>;
}
