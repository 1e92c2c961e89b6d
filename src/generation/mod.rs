//! Bot generation orchestration.
//!
//! This module implements:
//! - GenerationManager: request decomposition, cache fill, and draw
//! - PmcConverter: probabilistic conversion of ordinary combatants into
//!   faction PMCs with difficulty override modes
//! - ProfileGenerator / PlayerLevels: seams to the external collaborators
//!
//! A request is an ordered list of (role, difficulty) conditions. Each
//! condition resolves to a batch-sized generation job on a cache miss and a
//! single drawn profile in the response; the rest of the batch stays pooled
//! for future requests from any session.

pub mod errors;
pub mod generator;
pub mod manager;
pub mod models;
pub mod pmc;

pub use errors::{GenerationError, GenerationResult};
pub use generator::{PlayerLevels, ProfileGenerator};
pub use manager::GenerationManager;
pub use models::{BotCondition, BrainTypes, GenerateBotsRequest};
pub use pmc::PmcConverter;
