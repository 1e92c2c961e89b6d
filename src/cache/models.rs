//! Cache key model.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Composite key addressing one pre-generated batch.
///
/// Role and difficulty stay separate fields so hashing and equality operate
/// on the pair; concatenating the two strings would make ("a", "bc") and
/// ("ab", "c") collide.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CacheKey {
    role: String,
    difficulty: String,
}

impl CacheKey {
    /// Build a key from a unit's effective role and difficulty
    pub fn new(role: &str, difficulty: &str) -> Self {
        Self {
            role: role.to_lowercase(),
            difficulty: difficulty.to_lowercase(),
        }
    }

    pub fn role(&self) -> &str {
        &self.role
    }

    pub fn difficulty(&self) -> &str {
        &self.difficulty
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.role, self.difficulty)
    }
}
