//! Attack resolution - one fighter hits another
//!
//! Steps:
//! 1. Roll the biome, crit and elemental bonuses (in that order)
//! 2. Sum the triggered bonuses into a multiplier
//! 3. attack_rate = attack * multiplier when the multiplier is positive,
//!    otherwise the plain attack
//! 4. armor_protection = defender armor * attack_rate
//! 5. damage = attack_rate - armor_protection, subtracted from defender HP
//!
//! Nothing is clamped: armor above 1.0 gives negative damage (healing) and
//! HP may drop below zero.

use super::result::{AttackResult, Combatant};
use crate::biome::{is_biome_damage, Biome};
use crate::fighter::Fighter;
use crate::rng::RandomSource;

/// Which bonuses triggered for an attack
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AttackRolls {
    pub biome: bool,
    pub crit: bool,
    pub elemental: bool,
}

impl AttackRolls {
    /// Draw all three rolls for `attacker` hitting `defender`.
    ///
    /// The elemental draw is always consumed, even when the attacker's
    /// element is not strong against the defender's.
    pub fn roll(
        attacker: &Fighter,
        defender: &Fighter,
        biome: Option<&Biome>,
        rng: &mut impl RandomSource,
    ) -> Self {
        let biome = is_biome_damage(biome, rng);
        let crit = attacker.is_crit(rng);
        let elemental = attacker.is_elemental_damage(rng)
            && attacker.element().is_strong_against(defender.element());
        AttackRolls {
            biome,
            crit,
            elemental,
        }
    }
}

/// Damage numbers for one attack
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DamageBreakdown {
    pub multiplier: f64,
    pub attack_rate: f64,
    pub armor_protection: f64,
    pub damage_dealt: f64,
}

/// Sum the bonus multiplier for a set of rolls.
///
/// The elemental bonus reads the defender's elemental damage, not the
/// attacker's.
pub fn bonus_multiplier(
    rolls: AttackRolls,
    attacker: &Fighter,
    defender: &Fighter,
    biome: Option<&Biome>,
) -> f64 {
    let mut multiplier = 0.0;
    if rolls.crit {
        multiplier += attacker.crit_damage;
    }
    if rolls.elemental {
        multiplier += defender.elemental_damage();
    }
    if rolls.biome {
        if let Some(biome) = biome {
            multiplier += biome.damage;
        }
    }
    multiplier
}

/// Apply a multiplier and armor to an attack value.
///
/// Only a positive multiplier applies. Zero, negative and NaN totals fall
/// back to the plain attack.
pub fn calculate_damage(attack: f64, armor: f64, multiplier: f64) -> DamageBreakdown {
    let attack_rate = if multiplier > 0.0 {
        attack * multiplier
    } else {
        attack
    };
    let armor_protection = armor * attack_rate;
    DamageBreakdown {
        multiplier,
        attack_rate,
        armor_protection,
        damage_dealt: attack_rate - armor_protection,
    }
}

/// Resolve an attack, drawing rolls from `rng`
pub fn resolve_attack(
    attacker: &Fighter,
    defender: &mut Fighter,
    biome: Option<&Biome>,
    round: u32,
    rng: &mut impl RandomSource,
) -> AttackResult {
    let rolls = AttackRolls::roll(attacker, defender, biome, rng);
    resolve_attack_with_rolls(attacker, defender, biome, round, rolls)
}

/// Resolve an attack with already-decided rolls
pub fn resolve_attack_with_rolls(
    attacker: &Fighter,
    defender: &mut Fighter,
    biome: Option<&Biome>,
    round: u32,
    rolls: AttackRolls,
) -> AttackResult {
    let multiplier = bonus_multiplier(rolls, attacker, defender, biome);
    let breakdown = calculate_damage(attacker.attack, defender.armor, multiplier);

    defender.hp -= breakdown.damage_dealt;

    tracing::debug!(
        attacker = %attacker.id,
        defender = %defender.id,
        round,
        crit = rolls.crit,
        elemental = rolls.elemental,
        biome = rolls.biome,
        multiplier,
        damage = breakdown.damage_dealt,
        defender_hp = defender.hp,
        "attack resolved"
    );

    AttackResult {
        attacker: combatant(attacker),
        defender: combatant(defender),
        round,
        biome: biome.map(|b| b.name.clone()),
        is_crit: rolls.crit,
        is_elemental: rolls.elemental,
        is_biome: rolls.biome,
        multiplier,
        attack_rate: breakdown.attack_rate,
        armor_protection: breakdown.armor_protection,
        damage_dealt: breakdown.damage_dealt,
    }
}

fn combatant(fighter: &Fighter) -> Combatant {
    Combatant {
        id: fighter.id.clone(),
        name: fighter.name.clone(),
        element: fighter.element(),
        hp: fighter.hp,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::ScriptedSource;
    use gear_core::{Element, Weapon};
    use proptest::prelude::*;

    fn fighter(name: &str, element: Element) -> Fighter {
        Fighter::with_element(name, element)
    }

    #[test]
    fn test_no_bonus_damage() {
        let attacker = fighter("A", Element::Fire);
        let mut defender = fighter("B", Element::Frost);
        let mut rng = ScriptedSource::never();

        let result = resolve_attack(&attacker, &mut defender, None, 1, &mut rng);

        assert!((result.attack_rate - 10.0).abs() < 1e-9);
        assert!((result.armor_protection - 1.0).abs() < 1e-9);
        assert!((result.damage_dealt - 9.0).abs() < 1e-9);
        assert!((defender.hp - 91.0).abs() < 1e-9);
        assert!(!result.is_multiplied());
        assert_eq!(result.annotation(), "");
    }

    #[test]
    fn test_crit_multiplier() {
        let attacker = fighter("A", Element::Fire);
        let mut defender = fighter("B", Element::Frost);
        defender.armor = 0.0;
        // No biome: crit, elemental
        let mut rng = ScriptedSource::new().with_bools([true, false]);

        let result = resolve_attack(&attacker, &mut defender, None, 1, &mut rng);

        assert!(result.is_crit);
        assert!((result.attack_rate - 12.0).abs() < 1e-9);
        assert!((result.damage_dealt - 12.0).abs() < 1e-9);
        assert_eq!(result.annotation(), "x1.2");
    }

    #[test]
    fn test_elemental_gated_by_relation() {
        for &attacking in Element::all() {
            for &defending in Element::all() {
                if attacking.is_strong_against(defending) {
                    continue;
                }
                let mut attacker = fighter("A", attacking);
                attacker.equip_weapon(
                    Weapon::new("Charm")
                        .with_elemental_chance(1.0)
                        .with_elemental_damage(2.0),
                );
                let defender = fighter("B", defending);
                // crit, elemental: the elemental draw is forced true
                let mut rng = ScriptedSource::new().with_bools([false, true]);

                let rolls = AttackRolls::roll(&attacker, &defender, None, &mut rng);
                assert!(!rolls.elemental, "{attacking} vs {defending}");
                assert_eq!(rng.remaining_bools(), 0);
            }
        }
    }

    #[test]
    fn test_elemental_requires_roll() {
        let attacker = fighter("A", Element::Fire);
        let defender = fighter("B", Element::Mist);
        let mut rng = ScriptedSource::new().with_bools([false, false]);

        let rolls = AttackRolls::roll(&attacker, &defender, None, &mut rng);
        assert!(!rolls.elemental);
    }

    #[test]
    fn test_elemental_bonus_uses_defender_stat() {
        // Pending confirmation: the bonus reads the defender's elemental
        // damage rather than the attacker's.
        let mut attacker = fighter("A", Element::Fire);
        attacker.equip_weapon(
            Weapon::new("Torch")
                .with_elemental_chance(1.0)
                .with_elemental_damage(5.0),
        );
        let mut defender = fighter("B", Element::Mist);
        defender.armor = 0.0;
        defender.equip_weapon(Weapon::new("Mist Orb").with_elemental_damage(1.5));

        let rolls = AttackRolls {
            elemental: true,
            ..Default::default()
        };
        let result = resolve_attack_with_rolls(&attacker, &mut defender, None, 3, rolls);

        assert!((result.multiplier - 1.5).abs() < 1e-9);
        assert!((result.attack_rate - 15.0).abs() < 1e-9);
    }

    #[test]
    fn test_elemental_hit_against_unarmed_defender_is_plain() {
        // Defender has no elemental damage, so the elemental bonus adds 0
        let attacker = fighter("A", Element::Frost);
        let mut defender = fighter("B", Element::Fire);
        defender.armor = 0.0;
        let rolls = AttackRolls {
            elemental: true,
            ..Default::default()
        };
        let result = resolve_attack_with_rolls(&attacker, &mut defender, None, 1, rolls);

        assert_eq!(result.multiplier, 0.0);
        assert!((result.attack_rate - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_biome_bonus() {
        let attacker = fighter("A", Element::Physical);
        let mut defender = fighter("B", Element::Physical);
        defender.armor = 0.0;
        let volcano = Biome::new("Volcano", 1.0, 0.8);
        // biome, crit, elemental
        let mut rng = ScriptedSource::new().with_bools([true, false, false]);

        let result = resolve_attack(&attacker, &mut defender, Some(&volcano), 2, &mut rng);

        assert!(result.is_biome);
        assert_eq!(result.biome.as_deref(), Some("Volcano"));
        assert!((result.attack_rate - 8.0).abs() < 1e-9);
    }

    #[test]
    fn test_all_bonuses_add() {
        let mut attacker = fighter("A", Element::Sludge);
        attacker.equip_weapon(Weapon::new("Ooze").with_elemental_chance(1.0));
        let mut defender = fighter("B", Element::Frost);
        defender.armor = 0.5;
        defender.equip_weapon(Weapon::new("Icicle").with_elemental_damage(1.0));
        let swamp = Biome::new("Swamp", 1.0, 0.3);
        let mut rng = ScriptedSource::new().with_bools([true, true, true]);

        let result = resolve_attack(&attacker, &mut defender, Some(&swamp), 4, &mut rng);

        // 1.2 crit + 1.0 elemental + 0.3 biome
        assert!((result.multiplier - 2.5).abs() < 1e-9);
        assert!((result.attack_rate - 25.0).abs() < 1e-9);
        assert!((result.armor_protection - 12.5).abs() < 1e-9);
        assert!((result.damage_dealt - 12.5).abs() < 1e-9);
        assert!((defender.hp - 87.5).abs() < 1e-9);
        assert_eq!(result.annotation(), "x2.5");
    }

    #[test]
    fn test_negative_multiplier_uses_plain_attack() {
        let mut attacker = fighter("A", Element::Fire);
        attacker.crit_damage = -0.5;
        let mut defender = fighter("B", Element::Frost);
        defender.armor = 0.0;
        let rolls = AttackRolls {
            crit: true,
            ..Default::default()
        };

        let result = resolve_attack_with_rolls(&attacker, &mut defender, None, 1, rolls);

        assert!((result.multiplier + 0.5).abs() < 1e-9);
        assert!((result.attack_rate - 10.0).abs() < 1e-9);
        assert!((result.damage_dealt - 10.0).abs() < 1e-9);
        assert!((defender.hp - 90.0).abs() < 1e-9);
        assert!(!result.is_multiplied());
        assert_eq!(result.annotation(), "");
    }

    #[test]
    fn test_nan_multiplier_uses_plain_attack() {
        let mut attacker = fighter("A", Element::Fire);
        attacker.crit_damage = f64::NAN;
        let mut defender = fighter("B", Element::Frost);
        defender.armor = 0.0;
        let rolls = AttackRolls {
            crit: true,
            ..Default::default()
        };

        let result = resolve_attack_with_rolls(&attacker, &mut defender, None, 1, rolls);

        assert!(result.multiplier.is_nan());
        assert!((result.attack_rate - 10.0).abs() < 1e-9);
        assert!((defender.hp - 90.0).abs() < 1e-9);
        assert!(!result.is_multiplied());
    }

    #[test]
    fn test_armor_above_one_heals() {
        let attacker = fighter("A", Element::Fire);
        let mut defender = fighter("B", Element::Fire);
        defender.armor = 1.5;
        let mut rng = ScriptedSource::never();

        let result = resolve_attack(&attacker, &mut defender, None, 1, &mut rng);

        assert!((result.damage_dealt + 5.0).abs() < 1e-9);
        assert!((defender.hp - 105.0).abs() < 1e-9);
    }

    #[test]
    fn test_hp_goes_negative() {
        let mut attacker = fighter("A", Element::Fire);
        attacker.attack = 500.0;
        let mut defender = fighter("B", Element::Fire);
        defender.armor = 0.0;
        let mut rng = ScriptedSource::never();

        let result = resolve_attack(&attacker, &mut defender, None, 1, &mut rng);

        assert!((defender.hp + 400.0).abs() < 1e-9);
        assert!(result.is_killing_blow());
    }

    #[test]
    fn test_result_records_sides() {
        let attacker = fighter("Ann", Element::Frost);
        let mut defender = fighter("Ben", Element::Fire);
        let mut rng = ScriptedSource::never();

        let result = resolve_attack(&attacker, &mut defender, None, 7, &mut rng);

        assert_eq!(result.round, 7);
        assert_eq!(result.attacker.name, "Ann");
        assert_eq!(result.attacker.element, Element::Frost);
        assert_eq!(result.defender.id, "Ben");
        assert!((result.defender.hp - defender.hp).abs() < f64::EPSILON);
        assert!(result.biome.is_none());
    }

    #[test]
    fn test_display() {
        let attacker = fighter("Ann", Element::Frost);
        let mut defender = fighter("Ben", Element::Fire);
        let mut rng = ScriptedSource::new().with_bools([true]);

        let text = resolve_attack(&attacker, &mut defender, None, 2, &mut rng).to_string();

        assert!(text.contains("Attacking Player: Ann (Frost)"));
        assert!(text.contains("Defending Player: Ben (Fire)"));
        assert!(text.contains("Round: 2"));
        assert!(text.contains("Attack Rate: 12 (x1.2)"));
        assert!(text.contains("Damage Done: 11"));
    }

    #[test]
    fn test_serialized_shape() {
        let attacker = fighter("Ann", Element::Frost);
        let mut defender = fighter("Ben", Element::Fire);
        let mut rng = ScriptedSource::never();
        let result = resolve_attack(&attacker, &mut defender, None, 1, &mut rng);

        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["attacker"]["element"], "frost");
        assert_eq!(value["round"], 1);
        assert_eq!(value["is_crit"], false);
        assert!(value["biome"].is_null());
    }

    proptest! {
        #[test]
        fn prop_zero_multiplier_keeps_attack(attack in 0.0f64..1000.0, armor in 0.0f64..1.0) {
            let breakdown = calculate_damage(attack, armor, 0.0);
            prop_assert_eq!(breakdown.attack_rate, attack);
        }

        #[test]
        fn prop_non_positive_multiplier_keeps_attack(
            attack in 0.0f64..1000.0,
            multiplier in -5.0f64..=0.0,
        ) {
            let breakdown = calculate_damage(attack, 0.0, multiplier);
            prop_assert_eq!(breakdown.attack_rate, attack);
        }

        #[test]
        fn prop_damage_is_rate_minus_armor_share(
            attack in 0.0f64..1000.0,
            armor in 0.0f64..1.0,
            multiplier in 0.0f64..5.0,
        ) {
            let breakdown = calculate_damage(attack, armor, multiplier);
            let expected = breakdown.attack_rate * (1.0 - armor);
            prop_assert!((breakdown.damage_dealt - expected).abs() < 1e-6);
            prop_assert!(breakdown.damage_dealt >= -1e-9);
            prop_assert!(breakdown.damage_dealt <= breakdown.attack_rate + 1e-9);
        }
    }
}
