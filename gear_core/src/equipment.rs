//! Equipment that fighters can wear
//!
//! Armor and weapons carry plain additive contributions. Values are not
//! validated here: negative or oversized numbers are accepted as-is.

use serde::{Deserialize, Serialize};

/// A piece of armor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Armor {
    /// Unique identifier (defaults to the name)
    #[serde(default)]
    pub id: String,
    /// Display name
    pub name: String,
    /// Fraction of incoming damage blocked, added to the wearer's armor
    #[serde(default)]
    pub armor: f64,
}

impl Armor {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Armor {
            id: name.clone(),
            name,
            armor: 0.0,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_armor(mut self, armor: f64) -> Self {
        self.armor = armor;
        self
    }
}

/// A weapon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weapon {
    /// Unique identifier (defaults to the name)
    #[serde(default)]
    pub id: String,
    /// Display name
    pub name: String,
    /// Flat attack bonus added to the wielder's attack
    #[serde(default)]
    pub attack: f64,
    /// Contribution to the elemental damage multiplier
    #[serde(default)]
    pub elemental_damage: f64,
    /// Contribution to the chance of an elemental hit
    #[serde(default)]
    pub elemental_chance: f64,
}

impl Weapon {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Weapon {
            id: name.clone(),
            name,
            attack: 0.0,
            elemental_damage: 0.0,
            elemental_chance: 0.0,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_attack(mut self, attack: f64) -> Self {
        self.attack = attack;
        self
    }

    pub fn with_elemental_damage(mut self, damage: f64) -> Self {
        self.elemental_damage = damage;
        self
    }

    pub fn with_elemental_chance(mut self, chance: f64) -> Self {
        self.elemental_chance = chance;
        self
    }
}

/// A skill slot. Carried by fighters, never read by attack resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl Skill {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Skill {
            id: name.clone(),
            name,
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// A pet companion. Carried by fighters, never read by attack resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pet {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl Pet {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Pet {
            id: name.clone(),
            name,
            image_url: None,
        }
    }
}

/// Fill in an empty `id` from the item's name.
///
/// Items deserialized from config may omit `id`; this mirrors what the
/// `new` constructors do.
pub trait Identified {
    fn id(&self) -> &str;
    fn name(&self) -> &str;
    fn set_id(&mut self, id: String);

    fn ensure_id(&mut self) {
        if self.id().is_empty() {
            let id = self.name().to_string();
            self.set_id(id);
        }
    }
}

macro_rules! impl_identified {
    ($($ty:ty),*) => {
        $(
            impl Identified for $ty {
                fn id(&self) -> &str {
                    &self.id
                }

                fn name(&self) -> &str {
                    &self.name
                }

                fn set_id(&mut self, id: String) {
                    self.id = id;
                }
            }
        )*
    };
}

impl_identified!(Armor, Weapon, Skill, Pet);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_name_as_id() {
        let sword = Weapon::new("Iron Sword");
        assert_eq!(sword.id, "Iron Sword");
        assert_eq!(sword.attack, 0.0);

        let plate = Armor::new("Plate").with_id("plate_01");
        assert_eq!(plate.id, "plate_01");
    }

    #[test]
    fn test_builders() {
        let staff = Weapon::new("Frost Staff")
            .with_attack(4.0)
            .with_elemental_damage(1.5)
            .with_elemental_chance(0.25);
        assert!((staff.attack - 4.0).abs() < f64::EPSILON);
        assert!((staff.elemental_damage - 1.5).abs() < f64::EPSILON);
        assert!((staff.elemental_chance - 0.25).abs() < f64::EPSILON);

        let helm = Armor::new("Helm").with_armor(0.05);
        assert!((helm.armor - 0.05).abs() < f64::EPSILON);
    }

    #[test]
    fn test_negative_values_accepted() {
        let cursed = Armor::new("Cursed Robe").with_armor(-0.3);
        assert!((cursed.armor + 0.3).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_weapon_without_id() {
        let toml = r#"
name = "Sludge Dagger"
attack = 3
elemental_chance = 0.4
"#;
        let mut dagger: Weapon = toml::from_str(toml).unwrap();
        assert!(dagger.id.is_empty());
        assert_eq!(dagger.elemental_damage, 0.0);

        dagger.ensure_id();
        assert_eq!(dagger.id, "Sludge Dagger");
    }

    #[test]
    fn test_ensure_id_keeps_existing() {
        let mut pet = Pet::new("Wolf");
        pet.id = "wolf_pup".to_string();
        pet.ensure_id();
        assert_eq!(pet.id, "wolf_pup");
    }
}
