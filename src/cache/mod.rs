//! Shared caches: pre-generated profile batches and dispatch snapshots.
//!
//! Both stores are process-lifetime and shared across sessions; the cost of
//! generating a batch for a (role, difficulty) pair is amortized across
//! every raid on the process. They are plain injectable values, never
//! globals, so tests construct an isolated instance each.

pub mod errors;
pub mod generation;
pub mod models;
pub mod snapshot;

pub use errors::{CacheError, CacheResult};
pub use generation::GenerationCache;
pub use models::CacheKey;
pub use snapshot::SnapshotCache;
