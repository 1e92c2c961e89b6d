//! Generation error types.

use thiserror::Error;

use crate::cache::CacheError;

/// Bot generation errors
#[derive(Debug, Error)]
pub enum GenerationError {
    /// Requested role has no preset batch entry
    #[error("No preset batch size configured for role {0}")]
    MissingPresetBatch(String),

    /// Event label has no base role mapping
    #[error("No base role configured for event role {0}")]
    UnknownEventRole(String),

    /// Batch cache invariant violation
    #[error(transparent)]
    Cache(#[from] CacheError),

    /// External profile generator failure
    #[error("Profile generator failed: {0}")]
    Generator(#[from] anyhow::Error),
}

/// Result type for generation operations
pub type GenerationResult<T> = Result<T, GenerationError>;
