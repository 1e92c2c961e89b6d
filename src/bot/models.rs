//! Bot profile and generation parameter models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Faction a bot fights for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Generic scavenger combatant
    Scav,
    /// Blufor faction PMC
    Blufor,
    /// Opfor faction PMC
    Opfor,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Scav => write!(f, "scav"),
            Side::Blufor => write!(f, "blufor"),
            Side::Opfor => write!(f, "opfor"),
        }
    }
}

/// A fully generated bot profile.
///
/// Profiles are produced by the external generator; this crate only moves
/// them between batches, responses, and snapshots, never back by reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotProfile {
    /// Unique profile id
    pub id: Uuid,

    /// Display name
    pub nickname: String,

    /// Role label carried by the profile. For event variants this is the
    /// originally requested label, not the base role generation ran with.
    pub role: String,

    /// Original event label when the request used a seasonal variant
    pub event_role: Option<String>,

    /// Faction
    pub side: Side,

    /// Difficulty tier the profile was built against
    pub difficulty: String,

    /// Character level
    pub level: u16,

    /// Whether the profile is a player-like faction combatant
    pub is_pmc: bool,

    /// When the profile was generated
    pub generated_at: DateTime<Utc>,
}

impl BotProfile {
    /// Build a profile shell from resolved generation parameters.
    ///
    /// Generator implementations start from this shell and fill in their
    /// synthesized content. The level is sampled within the configured delta
    /// of the player level, and the original event label, when present, is
    /// restored as the profile's role.
    pub fn new(nickname: &str, details: &GenerationParameters) -> Self {
        use rand::Rng;
        let mut rng = rand::rng();
        let floor = details
            .player_level
            .saturating_sub(details.level_delta_max)
            .max(1);
        let ceil = details
            .player_level
            .saturating_add(details.level_delta_max)
            .max(floor);

        Self {
            id: Uuid::new_v4(),
            nickname: nickname.to_string(),
            role: details
                .event_role
                .clone()
                .unwrap_or_else(|| details.role.clone()),
            event_role: details.event_role.clone(),
            side: details.side,
            difficulty: details.difficulty.clone(),
            level: rng.random_range(floor..=ceil),
            is_pmc: details.is_pmc,
            generated_at: Utc::now(),
        }
    }
}

/// Parameters for generating one unit.
///
/// Cloned once per generated unit; each clone is an independent deep copy,
/// so a PMC conversion on one unit never leaks into its siblings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationParameters {
    /// Whether the unit is a player-like faction combatant
    pub is_pmc: bool,

    /// Faction
    pub side: Side,

    /// Canonical role used for generation, never an event label
    pub role: String,

    /// Originally requested label when it encoded a seasonal variant
    pub event_role: Option<String>,

    /// Level of the player the raid belongs to
    pub player_level: u16,

    /// Maximum level delta between a PMC unit and the player
    pub level_delta_max: u16,

    /// Units to generate per batch for this condition
    pub count_to_generate: u32,

    /// Requested difficulty tier
    pub difficulty: String,

    /// Whether the unit stands in for a player-controlled scav
    pub is_player_scav: bool,
}

impl GenerationParameters {
    /// Role label the unit was requested as (the event label when present)
    pub fn requested_role(&self) -> &str {
        self.event_role.as_deref().unwrap_or(&self.role)
    }
}
