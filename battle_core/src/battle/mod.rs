//! Battle - owns the participants, round counter and statistics
//!
//! A battle resolves attacks one at a time. Who attacks whom and when the
//! battle ends is decided by a [`BattleStrategy`] passed to [`Battle::run`],
//! or by the caller driving [`Battle::attack`] directly.

mod observer;
mod pacing;
mod stats;
mod strategy;

pub use observer::{BattleObserver, LogObserver, NullObserver, RecordingObserver};
pub use pacing::{NoPacer, Pacer, RecordingPacer, ThreadPacer};
pub use stats::{BattleStat, BattleStats};
pub use strategy::{BattleStrategy, Duel, FreeForAll, Matchup};

use crate::biome::{is_biome_damage, Biome};
use crate::combat::{resolve_attack, AttackResult};
use crate::config::BattleConfig;
use crate::error::{BattleError, Result};
use crate::fighter::Fighter;
use crate::rng::RandomSource;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::time::Duration;

type DeathText = Box<dyn Fn(&Fighter) -> String>;

/// How a battle run ended
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BattleOutcome {
    /// Id of the winning fighter, if the strategy produced one
    pub winner: Option<String>,
    /// Round counter when the run stopped
    pub rounds: u32,
    pub stats: BattleStats,
}

impl BattleOutcome {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// A single battle session
pub struct Battle {
    round: u32,
    fighters: Vec<Fighter>,
    stats: BattleStats,
    biome: Option<Biome>,
    config: BattleConfig,
    player_died_text: Option<DeathText>,
}

impl Battle {
    /// Create a battle. Fighters sharing an id are collapsed to the first one.
    pub fn new(fighters: Vec<Fighter>) -> Self {
        let total = fighters.len();
        let mut seen = HashSet::new();
        let fighters: Vec<Fighter> = fighters
            .into_iter()
            .filter(|f| seen.insert(f.id.clone()))
            .collect();

        if fighters.len() < total {
            tracing::debug!(
                dropped = total - fighters.len(),
                "collapsed duplicate fighters"
            );
        }

        Battle {
            round: 0,
            fighters,
            stats: BattleStats::new(),
            biome: None,
            config: BattleConfig::default(),
            player_died_text: None,
        }
    }

    pub fn with_biome(mut self, biome: Biome) -> Self {
        self.biome = Some(biome);
        self
    }

    pub fn with_config(mut self, config: BattleConfig) -> Self {
        self.config = config;
        self
    }

    // === Round counter ===

    pub fn round(&self) -> u32 {
        self.round
    }

    /// Advance the round counter, returning the new round
    pub fn next_round(&mut self) -> u32 {
        self.round += 1;
        self.round
    }

    // === Participants ===

    pub fn fighters(&self) -> &[Fighter] {
        &self.fighters
    }

    /// Mutable access to participants; the roster itself cannot change
    pub fn fighters_mut(&mut self) -> &mut [Fighter] {
        &mut self.fighters
    }

    pub fn fighter(&self, id: &str) -> Option<&Fighter> {
        self.fighters.iter().find(|f| f.id == id)
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.fighters.iter().position(|f| f.id == id)
    }

    /// Run the optional stat checks on every fighter
    pub fn validate(&self) -> Result<()> {
        self.fighters.iter().try_for_each(Fighter::validate)
    }

    // === Biome ===

    pub fn biome(&self) -> Option<&Biome> {
        self.biome.as_ref()
    }

    /// Roll the biome bonus; always `false` without a biome
    pub fn is_biome_damage(&self, rng: &mut impl RandomSource) -> bool {
        is_biome_damage(self.biome.as_ref(), rng)
    }

    // === Configuration ===

    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    /// Set the pause between rounds
    pub fn set_interval(&mut self, ms: u64) -> &mut Self {
        self.config.interval_ms = ms;
        self
    }

    pub fn interval(&self) -> Duration {
        self.config.interval()
    }

    pub fn set_show_battle(&mut self, show: bool) -> &mut Self {
        self.config.show_battle = show;
        self
    }

    pub fn set_log_battle(&mut self, log: bool) -> &mut Self {
        self.config.log_battle = log;
        self
    }

    /// Replace the message produced when a fighter dies
    pub fn set_player_died_text<F>(&mut self, text: F) -> &mut Self
    where
        F: Fn(&Fighter) -> String + 'static,
    {
        self.player_died_text = Some(Box::new(text));
        self
    }

    pub fn player_died_text(&self, fighter: &Fighter) -> String {
        match &self.player_died_text {
            Some(text) => text(fighter),
            None => format!("{} has been defeated!", fighter.name),
        }
    }

    // === Statistics ===

    pub fn stats(&self) -> &BattleStats {
        &self.stats
    }

    /// Total damage dealt by a fighter, `None` before its first attack involvement
    pub fn damage_dealt(&self, id: &str) -> Option<f64> {
        self.stats.damage_dealt(id)
    }

    /// Last recorded HP of a fighter, `None` before its first attack involvement
    pub fn remaining_hp(&self, id: &str) -> Option<f64> {
        self.stats.remaining_hp(id)
    }

    // === Attacks ===

    /// Resolve one attack between two participants and record it.
    ///
    /// Fails only when the matchup does not address two distinct
    /// participants.
    pub fn attack(
        &mut self,
        matchup: Matchup,
        rng: &mut impl RandomSource,
    ) -> Result<AttackResult> {
        let (attacker, defender) = split_pair(&mut self.fighters, matchup)?;
        let result = resolve_attack(attacker, defender, self.biome.as_ref(), self.round, rng);

        self.stats.record_attack(
            &result.attacker.id,
            result.attacker.hp,
            &result.defender.id,
            result.defender.hp,
            result.damage_dealt,
        );

        if self.config.log_battle {
            tracing::info!("\n{}", result);
        }

        Ok(result)
    }

    /// [`Battle::attack`] addressing fighters by id
    pub fn attack_by_id(
        &mut self,
        attacker_id: &str,
        defender_id: &str,
        rng: &mut impl RandomSource,
    ) -> Result<AttackResult> {
        let attacker = self
            .index_of(attacker_id)
            .ok_or_else(|| BattleError::UnknownFighter(attacker_id.to_string()))?;
        let defender = self
            .index_of(defender_id)
            .ok_or_else(|| BattleError::UnknownFighter(defender_id.to_string()))?;
        self.attack(Matchup::new(attacker, defender), rng)
    }

    /// Play rounds until the strategy declares the battle over.
    ///
    /// Each round: the strategy picks a matchup, the round counter
    /// advances, the attack is resolved and reported to the observer
    /// (when `show_battle` is set), a fresh death is announced, and the
    /// pacer waits before the next round.
    pub fn run<S, O, P, R>(
        &mut self,
        strategy: &mut S,
        observer: &mut O,
        pacer: &mut P,
        rng: &mut R,
    ) -> Result<BattleOutcome>
    where
        S: BattleStrategy + ?Sized,
        O: BattleObserver + ?Sized,
        P: Pacer + ?Sized,
        R: RandomSource,
    {
        if self.fighters.len() < 2 {
            return Err(BattleError::NotEnoughFighters(self.fighters.len()));
        }
        if self.config.validate_stats {
            self.validate()?;
        }

        tracing::info!(
            fighters = self.fighters.len(),
            biome = ?self.biome.as_ref().map(|b| b.name.as_str()),
            "battle started"
        );

        let interval = self.interval();
        while !strategy.is_over(&self.fighters) {
            if let Some(max_rounds) = self.config.max_rounds {
                if self.round >= max_rounds {
                    tracing::warn!(max_rounds, "battle stopped at round cap");
                    return Ok(self.outcome(None));
                }
            }

            let Some(matchup) = strategy.next_matchup(&self.fighters, rng) else {
                break;
            };

            let defender_was_alive = self
                .fighters
                .get(matchup.defender)
                .is_some_and(Fighter::is_alive);

            self.next_round();
            let result = self.attack(matchup, rng)?;

            if self.config.show_battle {
                observer.on_attack(&result);
            }

            if defender_was_alive && result.is_killing_blow() {
                let defender = &self.fighters[matchup.defender];
                let message = self.player_died_text(defender);
                tracing::info!(fighter = %defender.id, round = self.round, "fighter died");
                if self.config.show_battle {
                    observer.on_fighter_died(defender, &message);
                }
            }

            if strategy.is_over(&self.fighters) {
                break;
            }
            pacer.wait(interval);
        }

        let winner = strategy
            .winner(&self.fighters)
            .and_then(|index| self.fighters.get(index))
            .map(|f| f.id.clone());
        Ok(self.outcome(winner))
    }

    fn outcome(&self, winner: Option<String>) -> BattleOutcome {
        tracing::info!(rounds = self.round, winner = ?winner, "battle finished");
        BattleOutcome {
            winner,
            rounds: self.round,
            stats: self.stats.clone(),
        }
    }
}

impl fmt::Debug for Battle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Battle")
            .field("round", &self.round)
            .field("fighters", &self.fighters)
            .field("stats", &self.stats)
            .field("biome", &self.biome)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Borrow the attacker immutably and the defender mutably
fn split_pair(fighters: &mut [Fighter], matchup: Matchup) -> Result<(&Fighter, &mut Fighter)> {
    let Matchup { attacker, defender } = matchup;
    let len = fighters.len();
    if attacker == defender || attacker >= len || defender >= len {
        return Err(BattleError::InvalidMatchup { attacker, defender });
    }

    if attacker < defender {
        let (left, right) = fighters.split_at_mut(defender);
        Ok((&left[attacker], &mut right[0]))
    } else {
        let (left, right) = fighters.split_at_mut(attacker);
        Ok((&right[0], &mut left[defender]))
    }
}
