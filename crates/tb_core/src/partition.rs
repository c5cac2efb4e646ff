//! Candidate 5-vs-5 partitions under a grouping constraint.
//!
//! Grouped players always land on team A together; team A is completed by
//! every size-`need` combination of the solo pool in lexicographic order,
//! and team B takes the leftover solos. Pure enumeration, deterministic
//! for identical inputs.

use crate::assignment::TEAM_SIZE;
use serde::{Deserialize, Serialize};

/// The caller's pre-parsed grouping directive: `grouped` must share a team,
/// `solo` players are free. Together they name all ten participants.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GroupConstraint {
    #[serde(default)]
    pub grouped: Vec<String>,
    pub solo: Vec<String>,
}

impl GroupConstraint {
    /// All participant names, grouped first.
    pub fn participants(&self) -> impl Iterator<Item = &String> {
        self.grouped.iter().chain(self.solo.iter())
    }

    pub fn len(&self) -> usize {
        self.grouped.len() + self.solo.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grouped.is_empty() && self.solo.is_empty()
    }
}

/// One candidate split. Teams are disjoint and cover all ten participants.
#[derive(Debug, Clone, PartialEq)]
pub struct Partition {
    pub team_a: Vec<String>,
    pub team_b: Vec<String>,
}

/// Enumerates every candidate partition consistent with `constraint`.
///
/// Produces C(|solo|, 5 - |grouped|) candidates. A grouped set larger than
/// a team, or a solo pool too small to complete it, yields no candidates;
/// the caller reports that as a failure.
pub fn enumerate_partitions(constraint: &GroupConstraint) -> Vec<Partition> {
    let Some(need) = TEAM_SIZE.checked_sub(constraint.grouped.len()) else {
        return Vec::new();
    };
    if constraint.solo.len() < need || constraint.len() != TEAM_SIZE * 2 {
        return Vec::new();
    }

    index_combinations(constraint.solo.len(), need)
        .into_iter()
        .map(|picked| {
            let mut team_a = constraint.grouped.clone();
            let mut team_b = Vec::with_capacity(TEAM_SIZE);
            let mut next_pick = picked.iter().copied().peekable();
            for (idx, name) in constraint.solo.iter().enumerate() {
                if next_pick.peek() == Some(&idx) {
                    next_pick.next();
                    team_a.push(name.clone());
                } else {
                    team_b.push(name.clone());
                }
            }
            Partition { team_a, team_b }
        })
        .collect()
}

/// All size-`k` combinations of `0..n`, each ascending, in lexicographic
/// order. `k == 0` yields the single empty combination.
fn index_combinations(n: usize, k: usize) -> Vec<Vec<usize>> {
    fn recurse(start: usize, n: usize, k: usize, current: &mut Vec<usize>, out: &mut Vec<Vec<usize>>) {
        if current.len() == k {
            out.push(current.clone());
            return;
        }
        let remaining = k - current.len();
        for idx in start..=(n - remaining) {
            current.push(idx);
            recurse(idx + 1, n, k, current, out);
            current.pop();
        }
    }

    if k > n {
        return Vec::new();
    }
    let mut out = Vec::new();
    recurse(0, n, k, &mut Vec::with_capacity(k), &mut out);
    out
}
