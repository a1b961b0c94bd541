//! Attack result - everything a renderer needs about one attack

use gear_core::Element;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One side of an attack as it stood once damage was applied
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Combatant {
    pub id: String,
    pub name: String,
    pub element: Element,
    pub hp: f64,
}

/// Outcome of resolving a single attack
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttackResult {
    pub attacker: Combatant,
    pub defender: Combatant,
    /// Round counter at the time of the attack
    pub round: u32,
    /// Name of the battle's biome, if any
    pub biome: Option<String>,

    // === Rolls ===
    pub is_crit: bool,
    /// Elemental roll succeeded and the attacker is strong against the defender
    pub is_elemental: bool,
    pub is_biome: bool,

    // === Numbers ===
    /// Sum of triggered bonuses; 0 when none triggered
    pub multiplier: f64,
    /// Attack after the multiplier, before armor
    pub attack_rate: f64,
    /// Portion of the attack rate absorbed by armor
    pub armor_protection: f64,
    /// HP removed from the defender
    pub damage_dealt: f64,
}

impl AttackResult {
    /// Whether any bonus multiplied this attack
    pub fn is_multiplied(&self) -> bool {
        self.multiplier > 0.0
    }

    /// Human-readable multiplier, e.g. `x2.4`; empty without a bonus
    pub fn annotation(&self) -> String {
        if self.is_multiplied() {
            format!("x{:.1}", self.multiplier)
        } else {
            String::new()
        }
    }

    /// Whether this attack left the defender at zero HP or below
    pub fn is_killing_blow(&self) -> bool {
        self.defender.hp <= 0.0
    }
}

impl fmt::Display for AttackResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ref biome) = self.biome {
            writeln!(f, "Biome: {}", biome)?;
        }
        writeln!(
            f,
            "Attacking Player: {} ({})",
            self.attacker.name, self.attacker.element
        )?;
        writeln!(
            f,
            "Defending Player: {} ({})",
            self.defender.name, self.defender.element
        )?;
        writeln!(f, "Round: {}", self.round)?;
        if self.is_multiplied() {
            writeln!(
                f,
                "Attack Rate: {} ({})",
                self.attack_rate.round(),
                self.annotation()
            )?;
        } else {
            writeln!(f, "Attack Rate: {}", self.attack_rate.round())?;
        }
        writeln!(f, "Damage Reduction: {}", self.armor_protection.round())?;
        write!(f, "Damage Done: {}", self.damage_dealt.round())
    }
}
