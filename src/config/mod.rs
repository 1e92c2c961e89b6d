//! Configuration surface consumed by bot generation.
//!
//! This module implements:
//! - SpawnConfig: preset batch sizes, per-map bot caps, hostility exemptions
//! - PmcConfig: faction identifiers, conversion chances, difficulty override
//! - Startup validation so configuration defects fail before the first raid

pub mod errors;
pub mod models;

pub use errors::{ConfigError, ConfigResult};
pub use models::{ChanceRange, DEFAULT_MAP_CAP_KEY, PmcConfig, SpawnConfig};
