//! Generation request models.

use serde::{Deserialize, Serialize};

/// One requested batch: a role at a difficulty tier.
///
/// The number of units generated behind the condition comes from the preset
/// batch configuration, not from the request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotCondition {
    /// Requested role label: canonical, event variant, or faction proxy
    pub role: String,

    /// Requested difficulty tier
    pub difficulty: String,
}

impl BotCondition {
    pub fn new(role: &str, difficulty: &str) -> Self {
        Self {
            role: role.to_string(),
            difficulty: difficulty.to_string(),
        }
    }
}

/// Request for bot profiles
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateBotsRequest {
    /// Ordered conditions; the response carries one profile per entry
    pub conditions: Vec<BotCondition>,
}

/// Brain types assigned to spawned bots
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrainTypes {
    /// Brain used by PMC bots
    pub pmc: String,

    /// Brain used by assault bots
    pub assault: String,
}
