//! Per-fighter statistics accumulated over a battle

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Running totals for one fighter
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BattleStat {
    /// Damage dealt as attacker, summed over all attacks
    pub total_damage_dealt: f64,
    /// HP as of the last attack this fighter took part in
    pub remaining_hp: f64,
}

/// Statistics keyed by fighter id.
///
/// Entries are created the first time a fighter attacks or is attacked.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BattleStats {
    stats: HashMap<String, BattleStat>,
}

impl BattleStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an attack: the attacker gains `damage`, both sides get their HP updated
    pub fn record_attack(
        &mut self,
        attacker_id: &str,
        attacker_hp: f64,
        defender_id: &str,
        defender_hp: f64,
        damage: f64,
    ) {
        let attacker = self.stats.entry(attacker_id.to_string()).or_default();
        attacker.total_damage_dealt += damage;
        attacker.remaining_hp = attacker_hp;

        let defender = self.stats.entry(defender_id.to_string()).or_default();
        defender.remaining_hp = defender_hp;
    }

    pub fn get(&self, id: &str) -> Option<&BattleStat> {
        self.stats.get(id)
    }

    /// Total damage dealt, `None` if the fighter has not been in an attack yet
    pub fn damage_dealt(&self, id: &str) -> Option<f64> {
        self.get(id).map(|s| s.total_damage_dealt)
    }

    /// Last known HP, `None` if the fighter has not been in an attack yet
    pub fn remaining_hp(&self, id: &str) -> Option<f64> {
        self.get(id).map(|s| s.remaining_hp)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &BattleStat)> {
        self.stats.iter().map(|(id, stat)| (id.as_str(), stat))
    }

    pub fn len(&self) -> usize {
        self.stats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }
}
