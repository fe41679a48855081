//! The in-progress character held by a wizard session.

use serde::{Deserialize, Serialize};

use shinobi_domain::{Ability, Attributes, Character, CharacterDescription, EquipmentItem, Jutsu};
use shinobi_shared::{CreateCharacterRequest, UpdateCharacterRequest};

/// Everything the wizard collects before commit.
///
/// Ids and the name are plain strings here: they are allowed to be empty
/// until the step guards require them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CharacterDraft {
    pub name: String,
    pub clan_id: String,
    pub class_id: String,
    pub attributes: Attributes,
    pub description: CharacterDescription,
    pub equipment: Vec<EquipmentItem>,
    pub armor: Option<String>,
    pub weapons: Vec<EquipmentItem>,
    pub jutsus: Vec<Jutsu>,
}

impl CharacterDraft {
    pub fn from_character(character: &Character) -> Self {
        Self {
            name: character.name.to_string(),
            clan_id: character.clan_id.to_string(),
            class_id: character.class_id.to_string(),
            attributes: character.attributes,
            description: character.description.clone(),
            equipment: character.equipment.clone(),
            armor: character.armor.clone(),
            weapons: character.weapons.clone(),
            jutsus: character.jutsus.clone(),
        }
    }

    /// Top-level fields replace; attributes and description merge per field.
    pub fn apply(&mut self, patch: DraftPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(clan_id) = patch.clan_id {
            self.clan_id = clan_id;
        }
        if let Some(class_id) = patch.class_id {
            self.class_id = class_id;
        }
        if let Some(attributes) = patch.attributes {
            attributes.apply_to(&mut self.attributes);
        }
        if let Some(description) = patch.description {
            description.apply_to(&mut self.description);
        }
        if let Some(equipment) = patch.equipment {
            self.equipment = equipment;
        }
        if let Some(armor) = patch.armor {
            self.armor = armor;
        }
        if let Some(weapons) = patch.weapons {
            self.weapons = weapons;
        }
        if let Some(jutsus) = patch.jutsus {
            self.jutsus = jutsus;
        }
    }

    pub fn to_create_request(&self) -> CreateCharacterRequest {
        CreateCharacterRequest {
            name: self.name.trim().to_string(),
            clan_id: self.clan_id.clone(),
            class_id: self.class_id.clone(),
            attributes: self.attributes,
            description: self.description.clone(),
            equipment: self.equipment.clone(),
            armor: self.armor.clone(),
            weapons: self.weapons.clone(),
            jutsus: self.jutsus.clone(),
        }
    }

    /// Full replacement of the wizard-owned fields of an existing record.
    pub fn to_update_request(&self) -> UpdateCharacterRequest {
        UpdateCharacterRequest {
            name: Some(self.name.trim().to_string()),
            clan_id: Some(self.clan_id.clone()),
            class_id: Some(self.class_id.clone()),
            attributes: Some(self.attributes),
            description: Some(self.description.clone()),
            equipment: Some(self.equipment.clone()),
            armor: Some(self.armor.clone()),
            weapons: Some(self.weapons.clone()),
            jutsus: Some(self.jutsus.clone()),
            ..UpdateCharacterRequest::default()
        }
    }
}

/// Partial update written by a wizard step.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DraftPatch {
    pub name: Option<String>,
    pub clan_id: Option<String>,
    pub class_id: Option<String>,
    pub attributes: Option<AttributePatch>,
    pub description: Option<DescriptionPatch>,
    pub equipment: Option<Vec<EquipmentItem>>,
    /// `Some(None)` clears the armor
    pub armor: Option<Option<String>>,
    pub weapons: Option<Vec<EquipmentItem>>,
    pub jutsus: Option<Vec<Jutsu>>,
}

impl DraftPatch {
    pub fn clan(id: impl Into<String>) -> Self {
        Self {
            clan_id: Some(id.into()),
            ..Self::default()
        }
    }

    pub fn class(id: impl Into<String>) -> Self {
        Self {
            class_id: Some(id.into()),
            ..Self::default()
        }
    }

    pub fn name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn attributes(attributes: impl Into<AttributePatch>) -> Self {
        Self {
            attributes: Some(attributes.into()),
            ..Self::default()
        }
    }

    pub fn description(description: DescriptionPatch) -> Self {
        Self {
            description: Some(description),
            ..Self::default()
        }
    }
}

/// Per-attribute partial scores.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AttributePatch {
    pub strength: Option<i32>,
    pub dexterity: Option<i32>,
    pub constitution: Option<i32>,
    pub intelligence: Option<i32>,
    pub wisdom: Option<i32>,
    pub charisma: Option<i32>,
}

impl AttributePatch {
    pub fn with(mut self, ability: Ability, score: i32) -> Self {
        let slot = match ability {
            Ability::Strength => &mut self.strength,
            Ability::Dexterity => &mut self.dexterity,
            Ability::Constitution => &mut self.constitution,
            Ability::Intelligence => &mut self.intelligence,
            Ability::Wisdom => &mut self.wisdom,
            Ability::Charisma => &mut self.charisma,
        };
        *slot = Some(score);
        self
    }

    fn apply_to(self, attributes: &mut Attributes) {
        let pairs = [
            (Ability::Strength, self.strength),
            (Ability::Dexterity, self.dexterity),
            (Ability::Constitution, self.constitution),
            (Ability::Intelligence, self.intelligence),
            (Ability::Wisdom, self.wisdom),
            (Ability::Charisma, self.charisma),
        ];
        for (ability, score) in pairs {
            if let Some(score) = score {
                attributes.set(ability, score);
            }
        }
    }
}

impl From<Attributes> for AttributePatch {
    fn from(attributes: Attributes) -> Self {
        Ability::ALL
            .into_iter()
            .fold(Self::default(), |patch, ability| {
                patch.with(ability, attributes.get(ability))
            })
    }
}

/// Per-field partial description.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescriptionPatch {
    pub name: Option<String>,
    pub age: Option<Option<u32>>,
    pub rank: Option<String>,
    pub title: Option<String>,
    pub appearance: Option<String>,
    pub personality_traits: Option<String>,
    pub ideals: Option<String>,
    pub bonds: Option<String>,
    pub flaws: Option<String>,
}

impl DescriptionPatch {
    fn apply_to(self, description: &mut CharacterDescription) {
        fn set<T>(slot: &mut T, value: Option<T>) {
            if let Some(value) = value {
                *slot = value;
            }
        }

        set(&mut description.name, self.name);
        set(&mut description.age, self.age);
        set(&mut description.rank, self.rank);
        set(&mut description.title, self.title);
        set(&mut description.appearance, self.appearance);
        set(&mut description.personality_traits, self.personality_traits);
        set(&mut description.ideals, self.ideals);
        set(&mut description.bonds, self.bonds);
        set(&mut description.flaws, self.flaws);
    }
}
