//! Observers receive what happens during a battle run for presentation

use crate::combat::AttackResult;
use crate::fighter::Fighter;

/// Receives attack results and death notices from a battle run
pub trait BattleObserver {
    fn on_attack(&mut self, _result: &AttackResult) {}

    /// `message` is the battle's player-died text for `fighter`
    fn on_fighter_died(&mut self, _fighter: &Fighter, _message: &str) {}
}

/// Discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl BattleObserver for NullObserver {}

/// Writes every event through `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl BattleObserver for LogObserver {
    fn on_attack(&mut self, result: &AttackResult) {
        tracing::info!(
            round = result.round,
            attacker = %result.attacker.id,
            defender = %result.defender.id,
            "\n{}",
            result
        );
    }

    fn on_fighter_died(&mut self, fighter: &Fighter, message: &str) {
        tracing::info!(fighter = %fighter.id, "{}", message);
    }
}

/// Keeps every event in memory
#[derive(Debug, Clone, Default)]
pub struct RecordingObserver {
    pub attacks: Vec<AttackResult>,
    pub deaths: Vec<String>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BattleObserver for RecordingObserver {
    fn on_attack(&mut self, result: &AttackResult) {
        self.attacks.push(result.clone());
    }

    fn on_fighter_died(&mut self, _fighter: &Fighter, message: &str) {
        self.deaths.push(message.to_string());
    }
}
