//! Ability value objects - the six named attributes of a character.
//!
//! Provides type safety for attribute references instead of magic strings
//! like "strength" or "dexterity".

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Score every attribute starts at before any method is applied.
pub const DEFAULT_ATTRIBUTE_SCORE: i32 = 10;

/// The six character attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ability {
    /// Strength - physical power
    Strength,
    /// Dexterity - agility and reflexes
    Dexterity,
    /// Constitution - endurance, feeds HP and chakra
    Constitution,
    /// Intelligence - reasoning and memory
    Intelligence,
    /// Wisdom - perception and insight
    Wisdom,
    /// Charisma - force of personality
    Charisma,
}

impl Ability {
    /// All attributes in sheet order.
    pub const ALL: [Ability; 6] = [
        Self::Strength,
        Self::Dexterity,
        Self::Constitution,
        Self::Intelligence,
        Self::Wisdom,
        Self::Charisma,
    ];

    /// Returns the lowercase key used on the wire (e.g., "strength").
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Strength => "strength",
            Self::Dexterity => "dexterity",
            Self::Constitution => "constitution",
            Self::Intelligence => "intelligence",
            Self::Wisdom => "wisdom",
            Self::Charisma => "charisma",
        }
    }

    /// Returns the short uppercase abbreviation (e.g., "STR").
    pub fn abbreviation(&self) -> &'static str {
        match self {
            Self::Strength => "STR",
            Self::Dexterity => "DEX",
            Self::Constitution => "CON",
            Self::Intelligence => "INT",
            Self::Wisdom => "WIS",
            Self::Charisma => "CHA",
        }
    }
}

impl fmt::Display for Ability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Ability {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strength" | "str" => Ok(Self::Strength),
            "dexterity" | "dex" => Ok(Self::Dexterity),
            "constitution" | "con" => Ok(Self::Constitution),
            "intelligence" | "int" => Ok(Self::Intelligence),
            "wisdom" | "wis" => Ok(Self::Wisdom),
            "charisma" | "cha" => Ok(Self::Charisma),
            _ => Err(DomainError::parse(format!("Unknown ability: {}", s))),
        }
    }
}

/// Base attribute scores of a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attributes {
    pub strength: i32,
    pub dexterity: i32,
    pub constitution: i32,
    pub intelligence: i32,
    pub wisdom: i32,
    pub charisma: i32,
}

impl Attributes {
    /// Every attribute set to the same score.
    pub fn uniform(score: i32) -> Self {
        Self {
            strength: score,
            dexterity: score,
            constitution: score,
            intelligence: score,
            wisdom: score,
            charisma: score,
        }
    }

    pub fn get(&self, ability: Ability) -> i32 {
        match ability {
            Ability::Strength => self.strength,
            Ability::Dexterity => self.dexterity,
            Ability::Constitution => self.constitution,
            Ability::Intelligence => self.intelligence,
            Ability::Wisdom => self.wisdom,
            Ability::Charisma => self.charisma,
        }
    }

    pub fn set(&mut self, ability: Ability, score: i32) {
        match ability {
            Ability::Strength => self.strength = score,
            Ability::Dexterity => self.dexterity = score,
            Ability::Constitution => self.constitution = score,
            Ability::Intelligence => self.intelligence = score,
            Ability::Wisdom => self.wisdom = score,
            Ability::Charisma => self.charisma = score,
        }
    }

    /// Iterate `(ability, score)` pairs in sheet order.
    pub fn iter(&self) -> impl Iterator<Item = (Ability, i32)> + '_ {
        Ability::ALL.into_iter().map(move |a| (a, self.get(a)))
    }

    /// Attribute scores must be positive integers.
    pub fn validate(&self) -> Result<(), DomainError> {
        match self.iter().find(|(_, score)| *score < 1) {
            Some((ability, score)) => Err(DomainError::validation(format!(
                "{} must be a positive integer, got {}",
                ability, score
            ))),
            None => Ok(()),
        }
    }
}

impl Default for Attributes {
    fn default() -> Self {
        Self::uniform(DEFAULT_ATTRIBUTE_SCORE)
    }
}

/// Per-attribute bonus granted by a clan. Missing entries read as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttributeBonuses {
    pub strength: i32,
    pub dexterity: i32,
    pub constitution: i32,
    pub intelligence: i32,
    pub wisdom: i32,
    pub charisma: i32,
}

impl AttributeBonuses {
    pub fn get(&self, ability: Ability) -> i32 {
        match ability {
            Ability::Strength => self.strength,
            Ability::Dexterity => self.dexterity,
            Ability::Constitution => self.constitution,
            Ability::Intelligence => self.intelligence,
            Ability::Wisdom => self.wisdom,
            Ability::Charisma => self.charisma,
        }
    }

    /// Builder used by the bundled reference data.
    pub fn with(mut self, ability: Ability, bonus: i32) -> Self {
        match ability {
            Ability::Strength => self.strength = bonus,
            Ability::Dexterity => self.dexterity = bonus,
            Ability::Constitution => self.constitution = bonus,
            Ability::Intelligence => self.intelligence = bonus,
            Ability::Wisdom => self.wisdom = bonus,
            Ability::Charisma => self.charisma = bonus,
        }
        self
    }
}

/// Ability modifiers, one per attribute.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Modifiers {
    pub strength: i32,
    pub dexterity: i32,
    pub constitution: i32,
    pub intelligence: i32,
    pub wisdom: i32,
    pub charisma: i32,
}

impl Modifiers {
    pub fn get(&self, ability: Ability) -> i32 {
        match ability {
            Ability::Strength => self.strength,
            Ability::Dexterity => self.dexterity,
            Ability::Constitution => self.constitution,
            Ability::Intelligence => self.intelligence,
            Ability::Wisdom => self.wisdom,
            Ability::Charisma => self.charisma,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ability_parse_accepts_names_and_abbreviations() {
        assert_eq!("Strength".parse::<Ability>().unwrap(), Ability::Strength);
        assert_eq!("dex".parse::<Ability>().unwrap(), Ability::Dexterity);
        assert!("luck".parse::<Ability>().is_err());
    }

    #[test]
    fn test_default_attributes_are_ten() {
        let attrs = Attributes::default();
        assert!(attrs.iter().all(|(_, score)| score == 10));
    }

    #[test]
    fn test_set_and_get() {
        let mut attrs = Attributes::default();
        attrs.set(Ability::Wisdom, 15);
        assert_eq!(attrs.get(Ability::Wisdom), 15);
        assert_eq!(attrs.wisdom, 15);
    }

    #[test]
    fn test_validate_rejects_non_positive_scores() {
        let mut attrs = Attributes::default();
        attrs.charisma = 0;
        let err = attrs.validate().unwrap_err();
        assert!(err.to_string().contains("charisma"));
    }

    #[test]
    fn test_bonuses_zero_fill_when_absent() {
        let bonuses: AttributeBonuses = serde_json::from_str(r#"{"strength": 2}"#).unwrap();
        assert_eq!(bonuses.get(Ability::Strength), 2);
        assert_eq!(bonuses.get(Ability::Charisma), 0);
    }
}
