//! Combat - resolving a single attack between two fighters

mod resolution;
mod result;

pub use resolution::{
    bonus_multiplier, calculate_damage, resolve_attack, resolve_attack_with_rolls, AttackRolls,
    DamageBreakdown,
};
pub use result::{AttackResult, Combatant};
