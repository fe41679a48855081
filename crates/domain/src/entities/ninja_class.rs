//! Ninja class entity - the character's discipline
//!
//! A class supplies the hit and chakra dice used for HP and chakra, the
//! primary ability, and the descriptive proficiency and equipment lists.

use serde::{Deserialize, Serialize};

use crate::ids::ClassId;
use crate::value_objects::{die_faces, Ability, DiceParseError};

/// A ninja class available during character creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NinjaClass {
    pub id: ClassId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Die expression like "1d8"
    pub hit_die: String,
    /// Die expression like "1d10"
    pub chakra_die: String,
    pub primary_ability: Ability,
    #[serde(default)]
    pub proficiencies: ClassProficiencies,
    #[serde(default)]
    pub starting_equipment: Vec<String>,
    #[serde(default)]
    pub starting_wealth: String,
    #[serde(default)]
    pub special_features: Vec<String>,
}

/// Proficiency lists granted by a class.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassProficiencies {
    pub armor: Vec<String>,
    pub weapons: Vec<String>,
    pub skills: Vec<String>,
    pub saving_throws: Vec<Ability>,
}

impl NinjaClass {
    pub fn new(
        id: impl Into<ClassId>,
        name: impl Into<String>,
        hit_die: impl Into<String>,
        chakra_die: impl Into<String>,
        primary_ability: Ability,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            hit_die: hit_die.into(),
            chakra_die: chakra_die.into(),
            primary_ability,
            proficiencies: ClassProficiencies::default(),
            starting_equipment: Vec::new(),
            starting_wealth: String::new(),
            special_features: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_proficiencies(mut self, proficiencies: ClassProficiencies) -> Self {
        self.proficiencies = proficiencies;
        self
    }

    pub fn with_starting_equipment<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.starting_equipment = items.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_starting_wealth(mut self, wealth: impl Into<String>) -> Self {
        self.starting_wealth = wealth.into();
        self
    }

    pub fn with_features<I, S>(mut self, features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.special_features = features.into_iter().map(Into::into).collect();
        self
    }

    /// Number of faces on the hit die.
    pub fn hit_die_faces(&self) -> Result<i32, DiceParseError> {
        die_faces(&self.hit_die)
    }

    /// Number of faces on the chakra die.
    pub fn chakra_die_faces(&self) -> Result<i32, DiceParseError> {
        die_faces(&self.chakra_die)
    }
}

fn to_strings<const N: usize>(values: [&str; N]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

impl ClassProficiencies {
    pub fn new<const A: usize, const W: usize, const S: usize>(
        armor: [&str; A],
        weapons: [&str; W],
        skills: [&str; S],
        saving_throws: [Ability; 2],
    ) -> Self {
        Self {
            armor: to_strings(armor),
            weapons: to_strings(weapons),
            skills: to_strings(skills),
            saving_throws: saving_throws.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn die_faces_come_from_expressions() {
        let class = NinjaClass::new("medical_ninja", "Ninja Médico", "1d8", "1d10", Ability::Wisdom);
        assert_eq!(class.hit_die_faces().unwrap(), 8);
        assert_eq!(class.chakra_die_faces().unwrap(), 10);
    }

    #[test]
    fn malformed_die_is_an_error() {
        let class = NinjaClass::new("broken", "Broken", "d", "1d6", Ability::Strength);
        assert!(class.hit_die_faces().is_err());
    }

    #[test]
    fn saving_throws_serialize_lowercase() {
        let profs = ClassProficiencies::new(
            ["Leve"],
            [],
            ["Atletismo"],
            [Ability::Strength, Ability::Constitution],
        );
        let json = serde_json::to_value(&profs).unwrap();
        assert_eq!(json["saving_throws"][1], "constitution");
    }
}
