//! Difficulty tiers and the settings record.

use serde::{Deserialize, Serialize};

/// Difficulty tiers bots can be generated at
pub const SUPPORTED_TIERS: [&str; 4] = ["easy", "normal", "hard", "impossible"];

/// Uniformly pick one of the supported tiers
pub fn random_tier() -> &'static str {
    use rand::Rng;
    let mut rng = rand::rng();
    SUPPORTED_TIERS[rng.random_range(0..SUPPORTED_TIERS.len())]
}

/// Convert a pre-raid dropdown value to a concrete tier.
///
/// "random" resolves to a random tier; anything else is already a tier name.
pub fn tier_from_dropdown(value: &str) -> String {
    if value.eq_ignore_ascii_case("random") {
        random_tier().to_string()
    } else {
        value.to_lowercase()
    }
}

/// Difficulty settings for one bot type at one tier.
///
/// The behavior payload comes from the provider and is carried opaquely;
/// this crate only appends hostility entries to it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DifficultySettings {
    /// Bot types this bot treats as hostile
    pub enemy_types: Vec<String>,

    /// Provider-defined behavior payload
    pub settings: serde_json::Value,
}

impl DifficultySettings {
    pub fn new(settings: serde_json::Value) -> Self {
        Self {
            enemy_types: Vec::new(),
            settings,
        }
    }

    /// Append hostile types, skipping the bot's own type and entries already
    /// present
    pub fn add_enemy_types(&mut self, enemies: &[String], own_type: &str) {
        for enemy in enemies {
            if enemy.eq_ignore_ascii_case(own_type) {
                continue;
            }
            if !self
                .enemy_types
                .iter()
                .any(|existing| existing.eq_ignore_ascii_case(enemy))
            {
                self.enemy_types.push(enemy.clone());
            }
        }
    }
}
