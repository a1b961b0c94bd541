//! Battle configuration and whole-battle setup files

use super::{load_toml, parse_toml, ConfigError};
use crate::battle::Battle;
use crate::biome::Biome;
use crate::error::BattleError;
use crate::fighter::{Fighter, FighterConfig};
use crate::rng::RandomSource;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Per-battle settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattleConfig {
    /// Pause between rounds in milliseconds
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
    /// Pass attack results and death notices to the observer
    #[serde(default = "default_show_battle")]
    pub show_battle: bool,
    /// Log every attack result through `tracing`
    #[serde(default)]
    pub log_battle: bool,
    /// Stop a run with no winner after this many rounds
    #[serde(default)]
    pub max_rounds: Option<u32>,
    /// Reject fighters with out-of-range stats before a run
    #[serde(default)]
    pub validate_stats: bool,
}

fn default_interval_ms() -> u64 {
    4000
}
fn default_show_battle() -> bool {
    true
}

impl Default for BattleConfig {
    fn default() -> Self {
        BattleConfig {
            interval_ms: default_interval_ms(),
            show_battle: default_show_battle(),
            log_battle: false,
            max_rounds: None,
            validate_stats: false,
        }
    }
}

impl BattleConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    /// Load settings from a TOML file
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        load_toml(path)
    }
}

/// A complete battle description: settings, optional biome and roster
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BattleFile {
    #[serde(default)]
    pub battle: BattleConfig,
    #[serde(default)]
    pub biome: Option<Biome>,
    #[serde(default)]
    pub fighters: Vec<FighterConfig>,
}

impl BattleFile {
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let file: BattleFile = load_toml(path)?;
        file.check()?;
        Ok(file)
    }

    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let file: BattleFile = parse_toml(content)?;
        file.check()?;
        Ok(file)
    }

    fn check(&self) -> Result<(), ConfigError> {
        if let Some(max_rounds) = self.battle.max_rounds {
            if max_rounds == 0 {
                return Err(ConfigError::Validation(
                    "max_rounds must be at least 1".to_string(),
                ));
            }
        }
        if let Some(config) = self.fighters.iter().find(|f| f.name.is_empty()) {
            return Err(ConfigError::Validation(format!(
                "fighter with id {:?} has an empty name",
                config.id
            )));
        }
        Ok(())
    }

    /// Load a file and build its battle in one step
    pub fn load_battle(path: &Path, rng: &mut impl RandomSource) -> Result<Battle, BattleError> {
        Self::load_from_path(path)?.into_battle(rng)
    }

    /// Build the battle, rolling elements for fighters that do not fix one
    pub fn into_battle(self, rng: &mut impl RandomSource) -> Result<Battle, BattleError> {
        let fighters = self
            .fighters
            .into_iter()
            .map(|config| Fighter::from_config(config, &mut *rng))
            .collect();

        let mut battle = Battle::new(fighters).with_config(self.battle);
        if let Some(biome) = self.biome {
            battle = battle.with_biome(biome);
        }
        if battle.config().validate_stats {
            battle.validate()?;
        }
        Ok(battle)
    }
}
