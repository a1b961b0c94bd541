//! Biome - optional environmental damage bonus for a battle

use crate::rng::RandomSource;
use serde::{Deserialize, Serialize};

/// Environmental modifier applied to every attack in a battle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Biome {
    pub name: String,
    /// Probability that an attack gets the environmental bonus
    #[serde(default)]
    pub chance: f64,
    /// Multiplier bonus added when the bonus triggers
    #[serde(default)]
    pub damage: f64,
    /// Presentation only
    #[serde(default)]
    pub icon_url: Option<String>,
}

impl Biome {
    pub fn new(name: impl Into<String>, chance: f64, damage: f64) -> Self {
        Biome {
            name: name.into(),
            chance,
            damage,
            icon_url: None,
        }
    }

    pub fn with_icon_url(mut self, url: impl Into<String>) -> Self {
        self.icon_url = Some(url.into());
        self
    }

    /// Roll whether this biome adds its bonus to an attack
    pub fn roll(&self, rng: &mut impl RandomSource) -> bool {
        rng.bool(self.chance)
    }
}

/// Roll the biome bonus, never triggering when no biome is configured.
///
/// No draw is consumed when `biome` is `None`.
pub fn is_biome_damage(biome: Option<&Biome>, rng: &mut impl RandomSource) -> bool {
    match biome {
        Some(biome) => biome.roll(rng),
        None => false,
    }
}
