//! Error types for battle setup and orchestration

use crate::config::ConfigError;
use thiserror::Error;

/// Result type alias using [`BattleError`]
pub type Result<T> = std::result::Result<T, BattleError>;

/// Errors raised by the battle engine.
///
/// Attack resolution itself never fails; these cover addressing fighters
/// that are not in the battle, opt-in stat validation and setup.
#[derive(Debug, Error)]
pub enum BattleError {
    /// A fighter stat is out of its expected range
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// No participant has this id
    #[error("Unknown fighter: {0}")]
    UnknownFighter(String),

    /// Indices out of range, or a fighter attacking itself
    #[error("Invalid matchup: attacker {attacker}, defender {defender}")]
    InvalidMatchup { attacker: usize, defender: usize },

    /// A battle run needs at least two participants
    #[error("Not enough fighters to run a battle: {0}")]
    NotEnoughFighters(usize),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
