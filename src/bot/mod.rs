//! Bot profile and parameter models.

pub mod models;

pub use models::{BotProfile, GenerationParameters, Side};
