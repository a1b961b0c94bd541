//! battle_core - Turn-based battle resolution engine
//!
//! This library provides:
//! - Fighter: base stats, equipment and an elemental type
//! - Biome: optional environmental damage bonus
//! - Attack resolution: crit, elemental and biome bonuses combined into one hit
//! - Battle: round counter, participants and per-fighter statistics
//! - Strategies, observers and pacers for running a whole battle
//!
//! # Quick Start
//!
//! ```rust
//! use battle_core::prelude::*;
//!
//! let mut rng = SeededSource::seeded(42);
//!
//! let mut knight = Fighter::new("knight", &mut rng);
//! knight.equip_weapon(Weapon::new("longsword").with_attack(6.0));
//! knight.equip_armor(Armor::new("chainmail").with_armor(0.15));
//! let goblin = Fighter::new("goblin", &mut rng);
//!
//! let mut battle = Battle::new(vec![knight, goblin]).with_biome(Biome::new("Swamp", 0.2, 0.5));
//! battle.set_interval(0);
//!
//! let outcome = battle
//!     .run(&mut Duel::new(), &mut NullObserver, &mut NoPacer, &mut rng)
//!     .unwrap();
//! assert!(outcome.winner.is_some());
//! ```

pub mod battle;
pub mod biome;
pub mod combat;
pub mod config;
pub mod error;
pub mod fighter;
pub mod prelude;
pub mod rng;

// Core API - what most users need
pub use battle::{Battle, BattleOutcome, BattleStats, Matchup};
pub use biome::Biome;
pub use combat::AttackResult;
pub use fighter::{Fighter, FighterConfig};

// Extension points
pub use battle::{BattleObserver, BattleStrategy, Pacer};
pub use rng::{RandomSource, ScriptedSource, SeededSource};

// Configuration and errors
pub use config::{BattleConfig, BattleFile, ConfigError};
pub use error::BattleError;

// Re-export commonly needed gear_core types
pub use gear_core::{Armor, Element, Pet, Skill, Weapon};
