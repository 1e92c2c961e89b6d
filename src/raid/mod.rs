//! Session raid-configuration context shared by difficulty and cap
//! resolution.

pub mod cap;
pub mod context;
pub mod models;

pub use cap::CapResolver;
pub use context::RaidContext;
pub use models::{DIFFICULTY_AS_ONLINE, RaidConfiguration, WaveSettings};
