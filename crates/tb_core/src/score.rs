//! Per-player, per-role score model.
//!
//! `score = tier_score * (1 + (proficiency - 1) * role_weight)`, so a
//! neutral proficiency of 1 leaves the raw tier score untouched. Scores are
//! computed once per request and reused by every partition evaluation.

use crate::models::{PlayerRecord, Role, ScoringConfig};
use std::collections::HashMap;

/// Precomputed score for every (participant, role) pair of one request.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreMatrix {
    rows: HashMap<String, [f64; 5]>,
}

impl ScoreMatrix {
    /// Builds the full matrix for the given participants. Every participant
    /// gets an entry for every role.
    pub fn build(participants: &[&PlayerRecord], config: &ScoringConfig) -> Self {
        let mut rows = HashMap::with_capacity(participants.len());
        for record in participants {
            let tier_score = config.tier_score(record.tier.trim());
            let mut row = [0.0; 5];
            for role in Role::ALL {
                let proficiency = record.proficiency(role);
                let weight = config.role_weight(role);
                row[role.index()] = tier_score * (1.0 + (proficiency - 1) as f64 * weight);
            }
            rows.insert(record.name.clone(), row);
        }
        ScoreMatrix { rows }
    }

    /// Score of `name` at `role`. Names outside the request's participant
    /// set are an internal caller bug and read as 0.
    pub fn score(&self, name: &str, role: Role) -> f64 {
        debug_assert!(self.rows.contains_key(name), "unknown participant: {name}");
        self.rows.get(name).map_or(0.0, |row| row[role.index()])
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
