//! # tb_core - Skill-Balanced 5v5 Team Builder
//!
//! This library partitions ten ranked players into two five-player teams
//! and assigns each player to one of five fixed roles, keeping pre-declared
//! groups together and minimizing the skill gap between the two teams.
//!
//! ## Features
//! - 100% deterministic results (same seed = same teams)
//! - Exact Hungarian role assignment (never greedy)
//! - Globally minimal score difference over all valid partitions
//! - JSON API for easy integration with chat bots and other hosts

pub mod api;
pub mod assignment;
pub mod balance;
pub mod error;
pub mod models;
pub mod partition;
pub mod score;


// Re-export main API surface
pub use api::{balance_teams_json, BalanceRequest, BalanceResponse, SCHEMA_VERSION};
pub use assignment::{assign_roles, RoleSlot, TeamAssignment, TEAM_SIZE};
pub use balance::{balance_teams, BalanceResult, ROSTER_SIZE};
pub use error::{BalanceError, Result};
pub use models::{PlayerRecord, Role, ScoringConfig};
pub use partition::{enumerate_partitions, GroupConstraint, Partition};
pub use score::ScoreMatrix;
