//! PMC conversion sampling and difficulty overrides.

use std::sync::Arc;

use rand::Rng;

use crate::bot::{GenerationParameters, Side};
use crate::config::SpawnConfig;
use crate::difficulty::random_tier;
use crate::raid::DIFFICULTY_AS_ONLINE;

/// Samples whether ordinary combatants convert into faction PMCs and
/// applies the configured PMC difficulty override.
pub struct PmcConverter {
    config: Arc<SpawnConfig>,
}

impl PmcConverter {
    pub fn new(config: Arc<SpawnConfig>) -> Self {
        Self { config }
    }

    /// Side a faction-proxy role resolves to, when the role is one
    pub fn side_for_role(&self, role: &str) -> Option<Side> {
        let pmc = &self.config.pmc;
        if role.eq_ignore_ascii_case(&pmc.blufor_type) {
            Some(Side::Blufor)
        } else if role.eq_ignore_ascii_case(&pmc.opfor_type) {
            Some(Side::Opfor)
        } else {
            None
        }
    }

    /// Uniformly pick one of the two faction PMC roles
    pub fn random_pmc_role(&self) -> String {
        let pmc = &self.config.pmc;
        let mut rng = rand::rng();
        if rng.random_bool(0.5) {
            pmc.blufor_type.clone()
        } else {
            pmc.opfor_type.clone()
        }
    }

    /// Roll the conversion chance for the unit and mutate it into a PMC on
    /// success. Roles without a configured range never convert.
    ///
    /// Returns whether the unit converted.
    pub fn maybe_convert(&self, details: &mut GenerationParameters) -> bool {
        let requested = details.requested_role().to_lowercase();
        let Some(range) = self.config.pmc.convert_into_pmc_chance.get(&requested) else {
            return false;
        };
        if !range.is_valid() {
            log::warn!(
                "Conversion chance for role {} is invalid ({}..{}), skipping conversion",
                requested,
                range.min,
                range.max
            );
            return false;
        }

        let mut rng = rand::rng();
        let chance = rng.random_range(range.min..=range.max);
        if !rng.random_bool((chance / 100.0).clamp(0.0, 1.0)) {
            return false;
        }

        details.is_pmc = true;
        details.role = self.random_pmc_role();
        details.side = self.side_for_role(&details.role).unwrap_or(Side::Blufor);
        details.difficulty = self.pmc_difficulty(&details.difficulty);
        true
    }

    /// Difficulty for a converted unit under the configured override mode:
    /// "asonline" keeps the requested tier, "random" picks one, any other
    /// literal applies to every PMC.
    pub fn pmc_difficulty(&self, requested: &str) -> String {
        let mode = self.config.pmc.difficulty.to_lowercase();
        if mode == DIFFICULTY_AS_ONLINE {
            return requested.to_string();
        }
        if mode == "random" {
            return random_tier().to_string();
        }
        mode
    }
}
