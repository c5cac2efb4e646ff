//! Balance selector: evaluates every candidate partition and keeps the
//! split whose optimally-assigned teams are closest in total score.
//!
//! Ties are broken uniformly at random through the caller-supplied RNG so
//! repeated requests do not always favor the lexicographically first
//! combination. With the RNG fixed, the whole computation is deterministic.

use crate::assignment::{assign_roles, TeamAssignment, TEAM_SIZE};
use crate::error::{BalanceError, Result};
use crate::models::{PlayerRecord, ScoringConfig};
use crate::partition::{enumerate_partitions, GroupConstraint};
use crate::score::ScoreMatrix;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use tracing::{debug, info};

/// Total participants per request.
pub const ROSTER_SIZE: usize = TEAM_SIZE * 2;

/// The final balanced split. Team A contains the grouped players (when a
/// group was declared); labelling and display order are the caller's
/// concern.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BalanceResult {
    pub team_a: TeamAssignment,
    pub team_b: TeamAssignment,
    pub score_diff: f64,
}

/// Balances the ten participants named by `constraint` into two teams.
///
/// Resolves names against `records`, scores every (player, role) pair once,
/// then minimizes the absolute difference of the two teams' optimal total
/// scores over all group-consistent partitions. `rng` is consumed only for
/// the tie-break among equally balanced partitions.
pub fn balance_teams(
    constraint: &GroupConstraint,
    config: &ScoringConfig,
    records: &[PlayerRecord],
    rng: &mut impl Rng,
) -> Result<BalanceResult> {
    if constraint.grouped.len() > TEAM_SIZE {
        return Err(BalanceError::GroupTooLarge {
            size: constraint.grouped.len(),
            limit: TEAM_SIZE,
        });
    }
    if constraint.len() != ROSTER_SIZE {
        return Err(BalanceError::RosterSize {
            expected: ROSTER_SIZE,
            found: constraint.len(),
        });
    }

    let mut seen = HashSet::with_capacity(ROSTER_SIZE);
    for name in constraint.participants() {
        if !seen.insert(name.as_str()) {
            return Err(BalanceError::DuplicateName(name.clone()));
        }
    }

    let by_name: HashMap<&str, &PlayerRecord> =
        records.iter().map(|r| (r.name.as_str(), r)).collect();
    let mut participants = Vec::with_capacity(ROSTER_SIZE);
    let mut missing = Vec::new();
    for name in constraint.participants() {
        match by_name.get(name.as_str()) {
            Some(record) => participants.push(*record),
            None => missing.push(name.clone()),
        }
    }
    if !missing.is_empty() {
        return Err(BalanceError::MissingPlayers(missing));
    }

    let matrix = ScoreMatrix::build(&participants, config);

    let candidates = enumerate_partitions(constraint);
    debug!(
        candidates = candidates.len(),
        grouped = constraint.grouped.len(),
        "evaluating candidate partitions"
    );

    let mut min_diff = f64::INFINITY;
    let mut best: Vec<BalanceResult> = Vec::new();
    for partition in &candidates {
        let team_a = assign_roles(&partition.team_a, &matrix);
        let team_b = assign_roles(&partition.team_b, &matrix);
        let score_diff = (team_a.total_score - team_b.total_score).abs();

        if score_diff < min_diff {
            min_diff = score_diff;
            best.clear();
        }
        if score_diff <= min_diff {
            best.push(BalanceResult {
                team_a,
                team_b,
                score_diff,
            });
        }
    }

    let tied = best.len();
    let result = best
        .choose(rng)
        .cloned()
        .ok_or(BalanceError::NoValidPartition)?;
    info!(
        score_diff = result.score_diff,
        tied, "selected balanced partition"
    );
    Ok(result)
}
