//! Bot spawn configuration models.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::errors::{ConfigError, ConfigResult};

/// Key of the mandatory fallback entry in the per-map cap table
pub const DEFAULT_MAP_CAP_KEY: &str = "default";

/// Inclusive percentage range a probability roll is drawn from
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChanceRange {
    /// Lower bound in percent
    pub min: f64,

    /// Upper bound in percent
    pub max: f64,
}

impl ChanceRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// A range that never succeeds
    pub fn never() -> Self {
        Self { min: 0.0, max: 0.0 }
    }

    /// Whether the bounds are ordered and within [0, 100]
    pub fn is_valid(&self) -> bool {
        self.min >= 0.0 && self.max <= 100.0 && self.min <= self.max
    }
}

/// PMC faction settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PmcConfig {
    /// Role identifier for blufor faction PMCs
    pub blufor_type: String,

    /// Role identifier for opfor faction PMCs
    pub opfor_type: String,

    /// Difficulty override applied to converted PMC units: "asonline" keeps
    /// the requested tier, "random" picks one, any other literal is used
    /// for every PMC
    pub difficulty: String,

    /// Chance a unit converts into a PMC, keyed by lower-cased role.
    /// Roles without an entry never convert.
    pub convert_into_pmc_chance: HashMap<String, ChanceRange>,

    /// Maximum level delta between a PMC bot and the player
    pub level_delta_max: u16,

    /// Brain type given to PMC bots
    pub brain_type: String,
}

impl Default for PmcConfig {
    fn default() -> Self {
        let mut convert_into_pmc_chance = HashMap::new();
        convert_into_pmc_chance.insert("assault".to_string(), ChanceRange::new(15.0, 35.0));
        convert_into_pmc_chance.insert("marksman".to_string(), ChanceRange::new(10.0, 25.0));
        convert_into_pmc_chance.insert("raider".to_string(), ChanceRange::new(20.0, 40.0));

        Self {
            blufor_type: "pmcBlufor".to_string(),
            opfor_type: "pmcOpfor".to_string(),
            difficulty: "asonline".to_string(),
            convert_into_pmc_chance,
            level_delta_max: 10,
            brain_type: "pmcBot".to_string(),
        }
    }
}

/// Bot spawn configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpawnConfig {
    /// Number of profile varieties generated per batch, keyed by the role
    /// label exactly as it appears in requests
    pub preset_batch: HashMap<String, u32>,

    /// Maximum simultaneous bots per map, lower-cased map names.
    /// Must contain a "default" entry.
    pub max_bot_cap: HashMap<String, u32>,

    /// Bot types that must not treat PMCs as hostile (scripted/event bots)
    pub pmc_hostility_exempt: Vec<String>,

    /// Lower-cased event role label mapped to the canonical base role used
    /// for generation
    pub event_base_roles: HashMap<String, String>,

    /// Brain type given to assault bots
    pub assault_brain_type: String,

    /// PMC faction settings
    pub pmc: PmcConfig,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        let mut preset_batch = HashMap::new();
        preset_batch.insert("assault".to_string(), 30);
        preset_batch.insert("marksman".to_string(), 15);
        preset_batch.insert("raider".to_string(), 15);
        preset_batch.insert("gifter".to_string(), 1);
        preset_batch.insert("assaultEvent".to_string(), 15);

        let mut max_bot_cap = HashMap::new();
        max_bot_cap.insert(DEFAULT_MAP_CAP_KEY.to_string(), 20);
        max_bot_cap.insert("harbor".to_string(), 25);
        max_bot_cap.insert("forest".to_string(), 24);
        max_bot_cap.insert("quarry".to_string(), 18);

        let mut event_base_roles = HashMap::new();
        event_base_roles.insert("assaultevent".to_string(), "assault".to_string());

        Self {
            preset_batch,
            max_bot_cap,
            pmc_hostility_exempt: vec!["gifter".to_string(), "civilian".to_string()],
            event_base_roles,
            assault_brain_type: "assaultBot".to_string(),
            pmc: PmcConfig::default(),
        }
    }
}

impl SpawnConfig {
    /// Validate configuration.
    ///
    /// Invariant violations here would otherwise surface mid-request, so
    /// they are rejected before the first raid instead.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.preset_batch.is_empty() {
            return Err(ConfigError::EmptyPresetBatch);
        }

        for (role, size) in &self.preset_batch {
            if *size == 0 {
                return Err(ConfigError::ZeroPresetBatch(role.clone()));
            }
        }

        if !self.max_bot_cap.contains_key(DEFAULT_MAP_CAP_KEY) {
            return Err(ConfigError::MissingDefaultCap);
        }

        if self.pmc.blufor_type.trim().is_empty() || self.pmc.opfor_type.trim().is_empty() {
            return Err(ConfigError::BlankFactionType);
        }

        for (role, range) in &self.pmc.convert_into_pmc_chance {
            if !range.is_valid() {
                return Err(ConfigError::InvalidChanceRange {
                    role: role.clone(),
                    min: range.min,
                    max: range.max,
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(SpawnConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_empty_preset_batch() {
        let mut config = SpawnConfig::default();
        config.preset_batch.clear();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::EmptyPresetBatch)
        ));
    }

    #[test]
    fn rejects_zero_batch_size() {
        let mut config = SpawnConfig::default();
        config.preset_batch.insert("assault".to_string(), 0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ZeroPresetBatch(role)) if role == "assault"
        ));
    }

    #[test]
    fn rejects_missing_default_cap() {
        let mut config = SpawnConfig::default();
        config.max_bot_cap.remove(DEFAULT_MAP_CAP_KEY);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::MissingDefaultCap)
        ));
    }

    #[test]
    fn rejects_blank_faction_type() {
        let mut config = SpawnConfig::default();
        config.pmc.opfor_type = "  ".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::BlankFactionType)
        ));
    }

    #[test]
    fn rejects_inverted_chance_range() {
        let mut config = SpawnConfig::default();
        config
            .pmc
            .convert_into_pmc_chance
            .insert("assault".to_string(), ChanceRange::new(50.0, 10.0));
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidChanceRange { .. })
        ));
    }

    #[test]
    fn zero_width_range_is_valid() {
        assert!(ChanceRange::never().is_valid());
    }
}
