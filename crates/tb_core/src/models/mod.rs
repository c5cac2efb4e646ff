pub mod config;
pub mod player;

pub use config::{ScoringConfig, DEFAULT_ROLE_WEIGHT};
pub use player::{PlayerRecord, Role};
