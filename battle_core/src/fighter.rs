//! Fighter - a combat participant with stats, equipment and an element

use crate::error::BattleError;
use crate::rng::RandomSource;
use gear_core::{Armor, Element, Identified, Pet, Skill, Weapon};
use serde::{Deserialize, Serialize};

/// Starting stats and optional slots for a fighter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FighterConfig {
    pub name: String,
    /// Unique id within a battle (defaults to the name)
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default = "default_attack")]
    pub attack: f64,
    #[serde(default = "default_hp")]
    pub hp: f64,
    #[serde(default = "default_armor")]
    pub armor: f64,
    #[serde(default = "default_crit_chance")]
    pub crit_chance: f64,
    #[serde(default = "default_crit_damage")]
    pub crit_damage: f64,
    /// Fixed element; picked at random when absent
    #[serde(default)]
    pub element: Option<Element>,
    #[serde(default)]
    pub skill: Option<Skill>,
    #[serde(default)]
    pub pet: Option<Pet>,
    #[serde(default)]
    pub image_url: Option<String>,
    /// Armors equipped in order on creation
    #[serde(default)]
    pub armors: Vec<Armor>,
    /// Weapons equipped in order on creation
    #[serde(default)]
    pub weapons: Vec<Weapon>,
}

fn default_attack() -> f64 {
    10.0
}
fn default_hp() -> f64 {
    100.0
}
fn default_armor() -> f64 {
    0.1
}
fn default_crit_chance() -> f64 {
    0.3
}
fn default_crit_damage() -> f64 {
    1.2
}

impl FighterConfig {
    pub fn new(name: impl Into<String>) -> Self {
        FighterConfig {
            name: name.into(),
            id: None,
            attack: default_attack(),
            hp: default_hp(),
            armor: default_armor(),
            crit_chance: default_crit_chance(),
            crit_damage: default_crit_damage(),
            element: None,
            skill: None,
            pet: None,
            image_url: None,
            armors: Vec::new(),
            weapons: Vec::new(),
        }
    }
}

/// A combat participant.
///
/// Base stats are public and may be tuned freely. The element is fixed at
/// creation and equipment can only be added, never removed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fighter {
    pub name: String,
    pub id: String,
    /// Damage dealt per attack before bonuses
    pub attack: f64,
    /// Health points; zero or below means dead
    pub hp: f64,
    /// Fraction of incoming attack rate blocked
    pub armor: f64,
    /// Probability of a critical attack
    pub crit_chance: f64,
    /// Multiplier bonus added on a critical attack
    pub crit_damage: f64,
    pub skill: Option<Skill>,
    pub pet: Option<Pet>,
    pub image_url: Option<String>,
    element: Element,
    equipped_armors: Vec<Armor>,
    equipped_weapons: Vec<Weapon>,
}

impl Fighter {
    /// Create a fighter with default stats and a random element
    pub fn new(name: impl Into<String>, rng: &mut impl RandomSource) -> Self {
        Self::from_config(FighterConfig::new(name), rng)
    }

    /// Create a fighter with default stats and a fixed element
    pub fn with_element(name: impl Into<String>, element: Element) -> Self {
        let mut config = FighterConfig::new(name);
        config.element = Some(element);
        Self::build(config, element)
    }

    /// Create a fighter from config, equipping its listed gear in order
    pub fn from_config(config: FighterConfig, rng: &mut impl RandomSource) -> Self {
        let element = match config.element {
            Some(element) => element,
            None => *rng.pick(Element::all()).unwrap_or(&Element::Physical),
        };
        Self::build(config, element)
    }

    fn build(config: FighterConfig, element: Element) -> Self {
        let FighterConfig {
            name,
            id,
            attack,
            hp,
            armor,
            crit_chance,
            crit_damage,
            skill,
            pet,
            image_url,
            armors,
            weapons,
            ..
        } = config;

        let mut fighter = Fighter {
            id: id.unwrap_or_else(|| name.clone()),
            name,
            attack,
            hp,
            armor,
            crit_chance,
            crit_damage,
            skill,
            pet,
            image_url,
            element,
            equipped_armors: Vec::new(),
            equipped_weapons: Vec::new(),
        };

        for mut armor in armors {
            armor.ensure_id();
            fighter.equip_armor(armor);
        }
        for mut weapon in weapons {
            weapon.ensure_id();
            fighter.equip_weapon(weapon);
        }
        fighter
    }

    pub fn element(&self) -> Element {
        self.element
    }

    /// Add armor; its armor value is added to the fighter's immediately
    pub fn equip_armor(&mut self, armor: Armor) {
        self.armor += armor.armor;
        self.equipped_armors.push(armor);
    }

    /// Add a weapon; its attack is added to the fighter's immediately
    pub fn equip_weapon(&mut self, weapon: Weapon) {
        self.attack += weapon.attack;
        self.equipped_weapons.push(weapon);
    }

    pub fn equipped_armors(&self) -> &[Armor] {
        &self.equipped_armors
    }

    pub fn equipped_weapons(&self) -> &[Weapon] {
        &self.equipped_weapons
    }

    /// Sum of equipped weapons' elemental damage
    pub fn elemental_damage(&self) -> f64 {
        self.equipped_weapons.iter().map(|w| w.elemental_damage).sum()
    }

    /// Sum of equipped weapons' elemental chance
    pub fn elemental_chance(&self) -> f64 {
        self.equipped_weapons.iter().map(|w| w.elemental_chance).sum()
    }

    /// Roll for a critical attack
    pub fn is_crit(&self, rng: &mut impl RandomSource) -> bool {
        rng.bool(self.crit_chance)
    }

    /// Roll for an elemental hit using the current elemental chance
    pub fn is_elemental_damage(&self, rng: &mut impl RandomSource) -> bool {
        rng.bool(self.elemental_chance())
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0.0
    }

    /// Check stats are in the ranges the damage formula expects.
    ///
    /// Not called by attack resolution; battles run it only when
    /// `validate_stats` is enabled.
    pub fn validate(&self) -> Result<(), BattleError> {
        if !(0.0..1.0).contains(&self.armor) {
            return Err(BattleError::Configuration(format!(
                "fighter '{}' armor {} is outside [0, 1)",
                self.id, self.armor
            )));
        }
        if self.attack < 0.0 {
            return Err(BattleError::Configuration(format!(
                "fighter '{}' attack {} is negative",
                self.id, self.attack
            )));
        }
        if !(0.0..=1.0).contains(&self.crit_chance) {
            return Err(BattleError::Configuration(format!(
                "fighter '{}' crit chance {} is outside [0, 1]",
                self.id, self.crit_chance
            )));
        }
        if self.crit_damage < 0.0 {
            return Err(BattleError::Configuration(format!(
                "fighter '{}' crit damage {} is negative",
                self.id, self.crit_damage
            )));
        }
        let chance = self.elemental_chance();
        if !(0.0..=1.0).contains(&chance) {
            return Err(BattleError::Configuration(format!(
                "fighter '{}' elemental chance {} is outside [0, 1]",
                self.id, chance
            )));
        }
        Ok(())
    }
}
