//! Configuration error types.

use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Preset batch table has no entries at all
    #[error("Preset batch table is empty")]
    EmptyPresetBatch,

    /// A role is configured with a zero-sized batch
    #[error("Preset batch size for role {0} must be greater than zero")]
    ZeroPresetBatch(String),

    /// Map cap table lacks its mandatory fallback entry
    #[error("Max bot cap table is missing the default entry")]
    MissingDefaultCap,

    /// A faction PMC identifier is blank
    #[error("PMC faction identifiers must not be blank")]
    BlankFactionType,

    /// A conversion chance range is inverted or out of percent bounds
    #[error("Conversion chance for role {role} is invalid: {min}..{max}")]
    InvalidChanceRange { role: String, min: f64, max: f64 },
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;
