//! Prelude module for convenient imports
//!
//! ```rust
//! use battle_core::prelude::*;
//! ```

// Core types
pub use crate::battle::{Battle, BattleOutcome, BattleStat, BattleStats, Matchup};
pub use crate::biome::Biome;
pub use crate::fighter::{Fighter, FighterConfig};

// Combat
pub use crate::combat::{AttackResult, AttackRolls};

// Running battles
pub use crate::battle::{
    BattleObserver, BattleStrategy, Duel, FreeForAll, LogObserver, NoPacer, NullObserver, Pacer,
    RecordingObserver, ThreadPacer,
};

// Randomness
pub use crate::rng::{RandomSource, RngSource, ScriptedSource, SeededSource};

// Config and errors
pub use crate::config::{BattleConfig, BattleFile};
pub use crate::error::BattleError;

// Re-exports from gear_core
pub use gear_core::{Armor, Element, Pet, Skill, Weapon};
