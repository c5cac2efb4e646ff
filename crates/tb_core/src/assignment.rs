//! Optimal player-to-role assignment for a single team.
//!
//! Maximum-weight perfect matching on the complete 5x5 player/role graph,
//! solved exactly with the Hungarian method. Scores are negated into a cost
//! matrix so ties in total score across bijections stay mathematically
//! exact; no greedy shortcut is taken anywhere.

use crate::models::Role;
use crate::score::ScoreMatrix;
use ordered_float::OrderedFloat;
use pathfinding::kuhn_munkres::kuhn_munkres_min;
use pathfinding::matrix::Matrix;
use serde::{Deserialize, Serialize};

/// Players per team; the solver is specialized to 5v5.
pub const TEAM_SIZE: usize = 5;

/// One player placed at one role, with the score they contribute there.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoleSlot {
    pub name: String,
    pub role: Role,
    pub score: f64,
}

/// A full team: five players, one per role, ordered by [`Role::ALL`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TeamAssignment {
    pub players: Vec<RoleSlot>,
    pub total_score: f64,
}

impl TeamAssignment {
    /// The player occupying `role`, if assigned.
    pub fn player_at(&self, role: Role) -> Option<&RoleSlot> {
        self.players.iter().find(|slot| slot.role == role)
    }
}

/// Finds the role bijection maximizing the team's total score.
///
/// Callers (the partition enumerator) guarantee exactly [`TEAM_SIZE`]
/// distinct members; violating that is a contract bug, not an error path.
/// Which of several total-score-tied bijections is returned is
/// implementation-defined.
pub fn assign_roles(team: &[String], matrix: &ScoreMatrix) -> TeamAssignment {
    debug_assert_eq!(team.len(), TEAM_SIZE, "assignment requires a full team");

    let costs = Matrix::from_fn(TEAM_SIZE, TEAM_SIZE, |(player_idx, role_idx)| {
        OrderedFloat(-matrix.score(&team[player_idx], Role::ALL[role_idx]))
    });
    let (_, assignments) = kuhn_munkres_min(&costs);

    // assignments[player_idx] = role_idx
    let mut players: Vec<RoleSlot> = assignments
        .iter()
        .enumerate()
        .map(|(player_idx, &role_idx)| {
            let role = Role::ALL[role_idx];
            RoleSlot {
                name: team[player_idx].clone(),
                role,
                score: matrix.score(&team[player_idx], role),
            }
        })
        .collect();
    players.sort_by_key(|slot| slot.role.index());

    let total_score = players.iter().map(|slot| slot.score).sum();
    TeamAssignment {
        players,
        total_score,
    }
}
