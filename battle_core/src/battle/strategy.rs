//! Battle strategies - who attacks whom, and when the battle ends

use crate::fighter::Fighter;
use crate::rng::RandomSource;

/// Attacker and defender for one round, as indices into the participants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Matchup {
    pub attacker: usize,
    pub defender: usize,
}

impl Matchup {
    pub fn new(attacker: usize, defender: usize) -> Self {
        Matchup { attacker, defender }
    }
}

/// Selection and termination policy for a battle run.
///
/// Battle shapes differ in how pairs are chosen (duels alternate,
/// free-for-all picks at random) and in when they end, so the round loop
/// delegates both decisions here.
pub trait BattleStrategy {
    /// Pick the next attacker/defender pair; `None` ends the battle
    fn next_matchup(
        &mut self,
        fighters: &[Fighter],
        rng: &mut dyn RandomSource,
    ) -> Option<Matchup>;

    /// Whether the battle is over
    fn is_over(&self, fighters: &[Fighter]) -> bool;

    /// Index of the winner once the battle is over.
    ///
    /// Defaults to the only fighter left alive.
    fn winner(&self, fighters: &[Fighter]) -> Option<usize> {
        let mut alive = fighters
            .iter()
            .enumerate()
            .filter(|(_, f)| f.is_alive())
            .map(|(i, _)| i);
        match (alive.next(), alive.next()) {
            (Some(index), None) => Some(index),
            _ => None,
        }
    }
}

fn alive_indices(fighters: &[Fighter]) -> Vec<usize> {
    fighters
        .iter()
        .enumerate()
        .filter(|(_, f)| f.is_alive())
        .map(|(i, _)| i)
        .collect()
}

// Host sources may return anything; keep the index inside `0..len`
fn clamped_pick(rng: &mut dyn RandomSource, len: usize) -> usize {
    rng.pick_index(len).min(len - 1)
}

/// Everyone against everyone: a random living fighter attacks a different
/// random living fighter each round.
#[derive(Debug, Clone, Copy, Default)]
pub struct FreeForAll;

impl BattleStrategy for FreeForAll {
    fn next_matchup(
        &mut self,
        fighters: &[Fighter],
        rng: &mut dyn RandomSource,
    ) -> Option<Matchup> {
        let mut alive = alive_indices(fighters);
        if alive.len() < 2 {
            return None;
        }
        let attacker = alive.remove(clamped_pick(rng, alive.len()));
        let defender = alive[clamped_pick(rng, alive.len())];
        Some(Matchup::new(attacker, defender))
    }

    fn is_over(&self, fighters: &[Fighter]) -> bool {
        fighters.iter().filter(|f| f.is_alive()).count() <= 1
    }
}

/// Two fighters taking turns.
///
/// A duel needs exactly two participants: with any other count it yields
/// no matchup and is over immediately, with no winner.
#[derive(Debug, Clone)]
pub struct Duel {
    next_attacker: Option<usize>,
}

impl Duel {
    /// The first participant attacks first
    pub fn new() -> Self {
        Duel {
            next_attacker: Some(0),
        }
    }

    /// The opening attacker is picked at random on the first round
    pub fn random_start() -> Self {
        Duel {
            next_attacker: None,
        }
    }
}

impl Default for Duel {
    fn default() -> Self {
        Self::new()
    }
}

impl BattleStrategy for Duel {
    fn next_matchup(
        &mut self,
        fighters: &[Fighter],
        rng: &mut dyn RandomSource,
    ) -> Option<Matchup> {
        if fighters.len() != 2 {
            return None;
        }
        let attacker = match self.next_attacker {
            Some(index) => index.min(1),
            None => rng.pick_index(2),
        };
        let defender = 1 - attacker;
        self.next_attacker = Some(defender);
        Some(Matchup::new(attacker, defender))
    }

    fn is_over(&self, fighters: &[Fighter]) -> bool {
        fighters.len() != 2 || fighters.iter().any(|f| !f.is_alive())
    }

    fn winner(&self, fighters: &[Fighter]) -> Option<usize> {
        match fighters {
            [first, second] => match (first.is_alive(), second.is_alive()) {
                (true, false) => Some(0),
                (false, true) => Some(1),
                _ => None,
            },
            _ => None,
        }
    }
}
