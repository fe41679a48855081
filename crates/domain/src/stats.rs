//! Stat derivation - modifiers and combat stats from attributes, clan and class
//!
//! Every function here is pure. Die sizes come from the class's "dN"/"XdN"
//! expressions; only the face count matters. Scores are only bounded below,
//! so the arithmetic saturates at the `i32` limits instead of overflowing.

use serde::{Deserialize, Serialize};

use crate::entities::{Clan, NinjaClass};
use crate::progression::proficiency_bonus;
use crate::value_objects::{die_faces, Ability, AttributeBonuses, Attributes, DiceParseError, Modifiers};

/// Base armor class before dexterity and proficiency.
pub const BASE_ARMOR_CLASS: i32 = 10;

/// Ability modifier for a score: `floor((score - 10) / 2)`.
///
/// ```
/// use shinobi_domain::stats::modifier;
/// assert_eq!(modifier(10), 0);
/// assert_eq!(modifier(15), 2);
/// assert_eq!(modifier(9), -1);
/// ```
pub fn modifier(score: i32) -> i32 {
    (i64::from(score) - 10).div_euclid(2) as i32
}

/// Base score plus an optional clan bonus.
pub fn effective_attribute(base: i32, clan_bonus: Option<i32>) -> i32 {
    base.saturating_add(clan_bonus.unwrap_or(0))
}

/// All six effective attributes.
pub fn effective_attributes(base: &Attributes, bonuses: Option<&AttributeBonuses>) -> Attributes {
    let mut effective = *base;
    for ability in Ability::ALL {
        let bonus = bonuses.map(|b| b.get(ability));
        effective.set(ability, effective_attribute(base.get(ability), bonus));
    }
    effective
}

/// Modifiers for every attribute of an (already effective) score block.
pub fn modifiers(attributes: &Attributes) -> Modifiers {
    Modifiers {
        strength: modifier(attributes.strength),
        dexterity: modifier(attributes.dexterity),
        constitution: modifier(attributes.constitution),
        intelligence: modifier(attributes.intelligence),
        wisdom: modifier(attributes.wisdom),
        charisma: modifier(attributes.charisma),
    }
}

/// Level-1 combat stats shown while building a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatStats {
    pub hp: i32,
    pub chakra: i32,
    pub armor_class: i32,
}

/// Derive hp, chakra and armor class from class dice and modifiers.
pub fn derived_combat_stats(
    hit_die: &str,
    chakra_die: &str,
    con_mod: i32,
    dex_mod: i32,
    prof_bonus: i32,
) -> Result<CombatStats, DiceParseError> {
    let hit_faces = die_faces(hit_die)?;
    let chakra_faces = die_faces(chakra_die)?;
    Ok(CombatStats {
        hp: hit_faces.saturating_add(con_mod).max(1),
        chakra: chakra_faces.saturating_add(con_mod).max(1),
        armor_class: armor_class(dex_mod, prof_bonus),
    })
}

/// `10 + dex_mod + floor(prof_bonus / 2)`
pub fn armor_class(dex_mod: i32, prof_bonus: i32) -> i32 {
    BASE_ARMOR_CLASS
        .saturating_add(dex_mod)
        .saturating_add(prof_bonus.div_euclid(2))
}

/// Everything the server derives for a stored character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterStats {
    pub max_hp: i32,
    pub max_chakra: i32,
    pub armor_class: i32,
    pub proficiency_bonus: i32,
    pub modifiers: Modifiers,
}

/// Server-side derivation at a given level.
///
/// Clan bonuses are applied before modifiers. HP and chakra scale linearly
/// with level and never drop below 1. Without a class (unknown id) the dice
/// default to d8.
pub fn character_stats(
    attributes: &Attributes,
    clan: Option<&Clan>,
    class: Option<&NinjaClass>,
    level: u8,
) -> Result<CharacterStats, DiceParseError> {
    let effective = effective_attributes(attributes, clan.map(|c| &c.bonuses));
    let mods = modifiers(&effective);
    let prof = proficiency_bonus(level);
    let (hit_faces, chakra_faces) = match class {
        Some(class) => (class.hit_die_faces()?, class.chakra_die_faces()?),
        None => (DEFAULT_DIE_FACES, DEFAULT_DIE_FACES),
    };
    let level = i32::from(level.max(1));

    Ok(CharacterStats {
        max_hp: scaled_pool(hit_faces, mods.constitution, level),
        max_chakra: scaled_pool(chakra_faces, mods.constitution, level),
        armor_class: armor_class(mods.dexterity, prof),
        proficiency_bonus: prof,
        modifiers: mods,
    })
}

const DEFAULT_DIE_FACES: i32 = 8;

/// `max(1, (faces + con_mod) * level)`, saturating.
fn scaled_pool(faces: i32, con_mod: i32, level: i32) -> i32 {
    faces.saturating_add(con_mod).saturating_mul(level).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modifier_uses_floor_division() {
        assert_eq!(modifier(10), 0);
        assert_eq!(modifier(11), 0);
        assert_eq!(modifier(15), 2);
        assert_eq!(modifier(8), -1);
        assert_eq!(modifier(9), -1);
        assert_eq!(modifier(1), -5);
        assert_eq!(modifier(20), 5);
        assert_eq!(modifier(-3), -7);
    }

    #[test]
    fn effective_attribute_adds_bonus() {
        assert_eq!(effective_attribute(14, Some(2)), 16);
        assert_eq!(effective_attribute(14, None), 14);
    }

    #[test]
    fn effective_attributes_zero_fill_missing_bonuses() {
        let bonuses = AttributeBonuses::default().with(Ability::Dexterity, 2);
        let effective = effective_attributes(&Attributes::default(), Some(&bonuses));
        assert_eq!(effective.dexterity, 12);
        assert_eq!(effective.strength, 10);
    }

    #[test]
    fn combat_stats_for_d10_d8() {
        let stats = derived_combat_stats("1d10", "1d8", 2, 1, 3).unwrap();
        assert_eq!(
            stats,
            CombatStats {
                hp: 12,
                chakra: 10,
                armor_class: 12
            }
        );
    }

    #[test]
    fn combat_stats_never_drop_below_one() {
        let stats = derived_combat_stats("d4", "d4", -5, 0, 3).unwrap();
        assert_eq!(stats.hp, 1);
        assert_eq!(stats.chakra, 1);
    }

    #[test]
    fn combat_stats_reject_bad_die() {
        assert!(derived_combat_stats("banana", "1d8", 0, 0, 3).is_err());
    }

    #[test]
    fn character_stats_apply_clan_bonus_and_level() {
        let mut attrs = Attributes::default();
        attrs.constitution = 14;
        attrs.dexterity = 13;
        let clan = Clan::new("uchiha", "Uchiha").with_bonus(Ability::Dexterity, 1);
        let class = NinjaClass::new("scout_ninja", "Scout", "1d10", "1d8", Ability::Dexterity);

        let level_one = character_stats(&attrs, Some(&clan), Some(&class), 1).unwrap();
        assert_eq!(level_one.max_hp, 12);
        assert_eq!(level_one.max_chakra, 10);
        assert_eq!(level_one.modifiers.dexterity, 2);
        assert_eq!(level_one.armor_class, 13);

        let level_five = character_stats(&attrs, Some(&clan), Some(&class), 5).unwrap();
        assert_eq!(level_five.max_hp, 60);
        assert_eq!(level_five.proficiency_bonus, 4);
        assert_eq!(level_five.armor_class, 14);
    }

    #[test]
    fn extreme_scores_saturate_instead_of_overflowing() {
        let mut attrs = Attributes::default();
        attrs.constitution = i32::MAX;
        attrs.dexterity = i32::MAX;
        let clan = Clan::new("akimichi", "Akimichi").with_bonus(Ability::Constitution, 2);
        let class = NinjaClass::new("x", "X", "1d12", "1d10", Ability::Strength);

        let stats = character_stats(&attrs, Some(&clan), Some(&class), 20).unwrap();
        assert_eq!(stats.modifiers.constitution, (i32::MAX - 10) / 2);
        assert_eq!(stats.max_hp, i32::MAX);
        assert_eq!(stats.max_chakra, i32::MAX);
        assert!(stats.armor_class > 0);

        assert_eq!(modifier(i32::MIN), -1_073_741_829);
        assert_eq!(effective_attribute(i32::MAX, Some(5)), i32::MAX);
    }

    #[test]
    fn character_stats_at_level_one_match_combat_stats() {
        let attrs = Attributes::uniform(12);
        let class = NinjaClass::new("x", "X", "1d6", "1d12", Ability::Intelligence);
        let full = character_stats(&attrs, None, Some(&class), 1).unwrap();
        let combat = derived_combat_stats("1d6", "1d12", 1, 1, 3).unwrap();
        assert_eq!(full.max_hp, combat.hp);
        assert_eq!(full.max_chakra, combat.chakra);
        assert_eq!(full.armor_class, combat.armor_class);
    }
}
