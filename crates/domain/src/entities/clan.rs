//! Clan entity - a bloodline a character belongs to
//!
//! Clans are static reference data. Their attribute bonuses feed the stat
//! engine; abilities and proficiencies are descriptive only.

use serde::{Deserialize, Serialize};

use crate::ids::ClanId;
use crate::value_objects::{Ability, AttributeBonuses};

/// A clan available during character creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clan {
    pub id: ClanId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Added to base attributes before modifiers are derived
    #[serde(default)]
    pub bonuses: AttributeBonuses,
    #[serde(default)]
    pub special_abilities: Vec<String>,
    #[serde(default)]
    pub proficiencies: Vec<String>,
}

impl Clan {
    pub fn new(id: impl Into<ClanId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            bonuses: AttributeBonuses::default(),
            special_abilities: Vec::new(),
            proficiencies: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_bonus(mut self, ability: Ability, bonus: i32) -> Self {
        self.bonuses = self.bonuses.with(ability, bonus);
        self
    }

    pub fn with_abilities<I, S>(mut self, abilities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.special_abilities = abilities.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_proficiencies<I, S>(mut self, proficiencies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.proficiencies = proficiencies.into_iter().map(Into::into).collect();
        self
    }

    /// Attributes this clan improves, in sheet order.
    pub fn boosted_abilities(&self) -> Vec<(Ability, i32)> {
        Ability::ALL
            .into_iter()
            .map(|a| (a, self.bonuses.get(a)))
            .filter(|(_, bonus)| *bonus != 0)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_bonuses() {
        let clan = Clan::new("uchiha", "Uchiha")
            .with_bonus(Ability::Dexterity, 2)
            .with_bonus(Ability::Intelligence, 1);
        assert_eq!(
            clan.boosted_abilities(),
            vec![(Ability::Dexterity, 2), (Ability::Intelligence, 1)]
        );
    }

    #[test]
    fn deserializes_without_optional_fields() {
        let clan: Clan = serde_json::from_str(r#"{"id": "sem_cla", "name": "Sem Clã"}"#).unwrap();
        assert_eq!(clan.id.as_str(), "sem_cla");
        assert!(clan.boosted_abilities().is_empty());
    }
}
