use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BalanceError {
    /// Names requested by the caller that have no record in the player
    /// database. The computation stops before any partitioning work.
    #[error("players not found in the database: {}", .0.join(", "))]
    MissingPlayers(Vec<String>),

    #[error("roster must have exactly {expected} participants, found {found}")]
    RosterSize { expected: usize, found: usize },

    /// A grouped set larger than a full team can never be placed.
    #[error("grouped players exceed a full team: {size} > {limit}")]
    GroupTooLarge { size: usize, limit: usize },

    /// The same name appears twice across the grouped and solo sets.
    #[error("duplicate participant name: {0}")]
    DuplicateName(String),

    /// The solo pool cannot complete the grouped team to five members.
    #[error("no valid team partition for the given grouping")]
    NoValidPartition,
}

pub type Result<T> = std::result::Result<T, BalanceError>;
