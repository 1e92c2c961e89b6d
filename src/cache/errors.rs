//! Cache error types.

use thiserror::Error;

use super::models::CacheKey;

/// Batch cache errors
#[derive(Debug, Error)]
pub enum CacheError {
    /// Draw attempted against a missing or exhausted batch. The orchestrator
    /// always checks and fills before drawing, so hitting this is a
    /// programming-invariant violation, not a recoverable miss.
    #[error("No cached bots available for {0}")]
    EmptyBatch(CacheKey),
}

/// Result type for cache operations
pub type CacheResult<T> = Result<T, CacheError>;
