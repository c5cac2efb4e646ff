//! JSON boundary for host integration.
//!
//! Hosts (chat bots, CLIs) hand the core a single JSON request carrying the
//! grouping directive, the scoring tables, and the player database rows,
//! and get back a serialized [`BalanceResult`]. The request seed drives the
//! tie-break RNG, so the same request always produces the same teams.

use crate::balance::{balance_teams, BalanceResult};
use crate::models::{PlayerRecord, Role, ScoringConfig};
use crate::partition::GroupConstraint;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, info, warn};

pub const SCHEMA_VERSION: u8 = 1;

#[derive(Debug, Deserialize)]
pub struct BalanceRequest {
    pub schema_version: u8,
    pub seed: u64,
    /// Names that must share a team (may be empty).
    #[serde(default)]
    pub grouped: Vec<String>,
    /// Freely assignable names; grouped + solo must name ten players.
    pub solo: Vec<String>,
    #[serde(default)]
    pub tier_scores: HashMap<String, f64>,
    #[serde(default)]
    pub role_weights: HashMap<Role, f64>,
    /// Player database rows; may contain non-participants.
    pub players: Vec<PlayerRecord>,
}

#[derive(Debug, Serialize)]
pub struct BalanceResponse {
    pub success: bool,
    pub result: Option<BalanceResult>,
    pub error: Option<String>,
}

/// Balances one JSON request. `Err` covers malformed envelopes only;
/// domain failures (missing players, bad grouping) come back as a
/// `success: false` response so hosts can relay the reason verbatim.
pub fn balance_teams_json(request_json: &str) -> Result<String, String> {
    let request: BalanceRequest = serde_json::from_str(request_json)
        .map_err(|e| format!("Invalid JSON request: {}", e))?;

    if request.schema_version != SCHEMA_VERSION {
        return Err(format!(
            "Unsupported schema version: {}",
            request.schema_version
        ));
    }

    debug!(
        seed = request.seed,
        grouped = request.grouped.len(),
        solo = request.solo.len(),
        players = request.players.len(),
        "balance request received"
    );

    let constraint = GroupConstraint {
        grouped: request.grouped,
        solo: request.solo,
    };
    let config = ScoringConfig {
        tier_scores: request.tier_scores,
        role_weights: request.role_weights,
    };
    let mut rng = ChaCha8Rng::seed_from_u64(request.seed);

    let response = match balance_teams(&constraint, &config, &request.players, &mut rng) {
        Ok(result) => {
            info!(score_diff = result.score_diff, "balance request succeeded");
            BalanceResponse {
                success: true,
                result: Some(result),
                error: None,
            }
        }
        Err(err) => {
            warn!(error = %err, "balance request failed");
            BalanceResponse {
                success: false,
                result: None,
                error: Some(err.to_string()),
            }
        }
    };

    serde_json::to_string(&response).map_err(|e| format!("Failed to serialize response: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request_json(seed: u64) -> String {
        let players: Vec<_> = (0..10)
            .map(|i| json!({ "name": format!("P{i}"), "tier": "Gold" }))
            .collect();
        json!({
            "schema_version": 1,
            "seed": seed,
            "solo": (0..10).map(|i| format!("P{i}")).collect::<Vec<_>>(),
            "tier_scores": { "Gold": 10.0 },
            "players": players,
        })
        .to_string()
    }

    #[test]
    fn request_round_trips_to_balanced_teams() {
        let raw = balance_teams_json(&request_json(42)).unwrap();
        let response: serde_json::Value = serde_json::from_str(&raw).unwrap();

        assert_eq!(response["success"], true);
        assert_eq!(response["result"]["score_diff"], 0.0);
        assert_eq!(response["result"]["team_a"]["players"].as_array().unwrap().len(), 5);
        assert_eq!(response["result"]["team_b"]["total_score"], 50.0);
        assert_eq!(response["result"]["team_a"]["players"][0]["role"], "top");
    }

    #[test]
    fn same_seed_same_response() {
        assert_eq!(
            balance_teams_json(&request_json(7)).unwrap(),
            balance_teams_json(&request_json(7)).unwrap()
        );
    }

    #[test]
    fn unsupported_schema_version_is_an_envelope_error() {
        let raw = request_json(1).replace("\"schema_version\":1", "\"schema_version\":9");
        let err = balance_teams_json(&raw).unwrap_err();
        assert!(err.contains("Unsupported schema version"), "{err}");
    }

    #[test]
    fn missing_players_come_back_as_failed_response() {
        let players: Vec<_> = (0..8)
            .map(|i| json!({ "name": format!("P{i}"), "tier": "Gold" }))
            .collect();
        let raw = json!({
            "schema_version": 1,
            "seed": 0,
            "solo": (0..10).map(|i| format!("P{i}")).collect::<Vec<_>>(),
            "tier_scores": { "Gold": 10.0 },
            "players": players,
        })
        .to_string();

        let response: serde_json::Value =
            serde_json::from_str(&balance_teams_json(&raw).unwrap()).unwrap();
        assert_eq!(response["success"], false);
        let message = response["error"].as_str().unwrap();
        assert!(message.contains("P8") && message.contains("P9"), "{message}");
    }

    #[test]
    fn malformed_json_is_an_envelope_error() {
        let err = balance_teams_json("{not json").unwrap_err();
        assert!(err.contains("Invalid JSON request"), "{err}");
    }
}
