//! Difficulty settings resolution.
//!
//! This module implements:
//! - DifficultySettings: opaque provider payload plus the hostility list
//!   this crate augments
//! - DifficultyProvider: the seam to the external settings source
//! - DifficultyResolver: raid dropdown overrides, faction-aware branching,
//!   and PMC hostility augmentation with an exemption list

pub mod models;
pub mod provider;
pub mod resolver;

pub use models::{DifficultySettings, SUPPORTED_TIERS, random_tier, tier_from_dropdown};
pub use provider::DifficultyProvider;
pub use resolver::DifficultyResolver;
