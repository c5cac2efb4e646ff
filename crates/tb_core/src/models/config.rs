use super::player::Role;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Weight applied to roles absent from the configuration table.
pub const DEFAULT_ROLE_WEIGHT: f64 = 0.5;

/// Caller-supplied scoring tables, passed explicitly into every balance
/// request. No process-wide state is read by the core.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ScoringConfig {
    /// Tier label -> base skill score.
    #[serde(default)]
    pub tier_scores: HashMap<String, f64>,
    /// Role -> proficiency amplification coefficient.
    #[serde(default)]
    pub role_weights: HashMap<Role, f64>,
}

impl ScoringConfig {
    /// Base score for a tier label. An unrecognized or empty label scores 0
    /// so one bad row degrades a single player instead of the whole request.
    pub fn tier_score(&self, tier: &str) -> f64 {
        self.tier_scores.get(tier).copied().unwrap_or(0.0)
    }

    pub fn role_weight(&self, role: Role) -> f64 {
        self.role_weights
            .get(&role)
            .copied()
            .unwrap_or(DEFAULT_ROLE_WEIGHT)
    }
}
