//! Difficulty settings provider seam.

use crate::bot::Side;

use super::models::DifficultySettings;

/// Source of difficulty settings records.
///
/// Implementations own the numeric behavior content, usually loaded from
/// per-type tables; this crate only derives hostility lists from what they
/// return.
pub trait DifficultyProvider: Send + Sync {
    /// Settings for a generic bot type at the requested tier
    fn settings(&self, bot_type: &str, tier: &str) -> DifficultySettings;

    /// Settings for a faction PMC. Both faction identifiers are passed so
    /// implementations can set cross-faction hostility correctly.
    fn faction_settings(
        &self,
        side: Side,
        tier: &str,
        blufor_type: &str,
        opfor_type: &str,
    ) -> DifficultySettings;

    /// Base behavior settings shared by all bot types
    fn core_settings(&self) -> serde_json::Value;
}
