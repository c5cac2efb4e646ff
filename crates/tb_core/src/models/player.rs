use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// The five fixed roles of a 5v5 draft.
///
/// Declaration order is the canonical matrix/display order; it carries no
/// scoring semantics of its own.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Top,
    Jungle,
    Mid,
    Bot,
    Support,
}

impl Role {
    pub const ALL: [Role; 5] = [Role::Top, Role::Jungle, Role::Mid, Role::Bot, Role::Support];

    /// Index into [`Role::ALL`], used for matrix columns and display sorting.
    pub fn index(self) -> usize {
        match self {
            Role::Top => 0,
            Role::Jungle => 1,
            Role::Mid => 2,
            Role::Bot => 3,
            Role::Support => 4,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Top => "top",
            Role::Jungle => "jungle",
            Role::Mid => "mid",
            Role::Bot => "bot",
            Role::Support => "support",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the player database.
///
/// Owned by the external data source; the core only reads it. A missing
/// per-role rating means a neutral proficiency of 1, and an empty or
/// unrecognized tier degrades the player's score to zero rather than
/// failing the computation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlayerRecord {
    pub name: String,
    #[serde(default)]
    pub tier: String,
    #[serde(default)]
    pub proficiency: HashMap<Role, i64>,
}

impl PlayerRecord {
    pub fn new(name: impl Into<String>, tier: impl Into<String>) -> Self {
        PlayerRecord {
            name: name.into(),
            tier: tier.into(),
            proficiency: HashMap::new(),
        }
    }

    pub fn with_proficiency(mut self, role: Role, rating: i64) -> Self {
        self.proficiency.insert(role, rating);
        self
    }

    /// Rating for `role`, defaulting to the neutral 1 when absent.
    pub fn proficiency(&self, role: Role) -> i64 {
        self.proficiency.get(&role).copied().unwrap_or(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_proficiency_defaults_to_one() {
        let record = PlayerRecord::new("Faker", "Challenger").with_proficiency(Role::Mid, 3);
        assert_eq!(record.proficiency(Role::Mid), 3);
        assert_eq!(record.proficiency(Role::Top), 1);
        assert_eq!(record.proficiency(Role::Support), 1);
    }

    #[test]
    fn record_deserializes_with_role_keyed_ratings() {
        let json = r#"{
            "name": "Faker",
            "tier": "Challenger",
            "proficiency": { "mid": 3, "top": 2 }
        }"#;
        let record: PlayerRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.name, "Faker");
        assert_eq!(record.proficiency(Role::Mid), 3);
        assert_eq!(record.proficiency(Role::Top), 2);
        assert_eq!(record.proficiency(Role::Jungle), 1);
    }

    #[test]
    fn record_deserializes_without_optional_fields() {
        let record: PlayerRecord = serde_json::from_str(r#"{ "name": "Smurf" }"#).unwrap();
        assert_eq!(record.tier, "");
        assert!(record.proficiency.is_empty());
    }

    #[test]
    fn role_order_matches_index() {
        for (i, role) in Role::ALL.iter().enumerate() {
            assert_eq!(role.index(), i);
        }
    }
}
