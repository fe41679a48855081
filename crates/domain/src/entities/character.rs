//! Character entity - a persisted character sheet
//!
//! A character is created once the wizard commits, mutated by edit screens,
//! quick-stat patches and XP updates, and deleted explicitly. Optional
//! collections default to empty so records written by older versions still
//! deserialize.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::Clan;
use crate::ids::{CharacterId, ClanId, ClassId, NoteId, ShareId};
use crate::stats::{effective_attributes, CharacterStats};
use crate::value_objects::{Attributes, CharacterName, Quantity};

/// Condition every new character starts in.
pub const NORMAL_CONDITION: &str = "Normal";

/// Level every new character starts at.
pub const STARTING_LEVEL: u8 = 1;

fn default_condition() -> String {
    NORMAL_CONDITION.to_string()
}

fn default_level() -> u8 {
    STARTING_LEVEL
}

/// A persisted character sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub id: CharacterId,
    /// Public identifier for the read-only share view
    pub share_id: ShareId,
    pub name: CharacterName,
    pub clan_id: ClanId,
    pub class_id: ClassId,
    #[serde(default = "default_level")]
    pub level: u8,
    #[serde(default)]
    pub xp: u32,

    /// Base scores, before clan bonuses
    pub attributes: Attributes,
    pub description: CharacterDescription,

    #[serde(default)]
    pub equipment: Vec<EquipmentItem>,
    #[serde(default)]
    pub armor: Option<String>,
    #[serde(default)]
    pub weapons: Vec<EquipmentItem>,
    #[serde(default)]
    pub jutsus: Vec<Jutsu>,
    #[serde(default)]
    pub proficiencies: Vec<String>,
    #[serde(default = "default_condition")]
    pub condition: String,

    // Derived on the server, editable by hand afterwards
    pub hp: i32,
    pub max_hp: i32,
    pub chakra: i32,
    pub max_chakra: i32,
    pub armor_class: i32,
    pub proficiency_bonus: i32,
    #[serde(default)]
    pub modifiers: crate::value_objects::Modifiers,

    #[serde(default)]
    pub notes: Vec<Note>,
    /// Single free-text notes field kept alongside `notes` for older clients
    #[serde(default)]
    pub extra_notes: String,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Character {
    /// Build a level-1 character from creation input and its derived stats.
    pub fn create(input: NewCharacter, stats: CharacterStats, now: DateTime<Utc>) -> Self {
        Self {
            id: CharacterId::new(),
            share_id: ShareId::new(),
            name: input.name,
            clan_id: input.clan_id,
            class_id: input.class_id,
            level: STARTING_LEVEL,
            xp: 0,
            attributes: input.attributes,
            description: input.description,
            equipment: input.equipment,
            armor: input.armor,
            weapons: input.weapons,
            jutsus: input.jutsus,
            proficiencies: Vec::new(),
            condition: default_condition(),
            hp: stats.max_hp,
            max_hp: stats.max_hp,
            chakra: stats.max_chakra,
            max_chakra: stats.max_chakra,
            armor_class: stats.armor_class,
            proficiency_bonus: stats.proficiency_bonus,
            modifiers: stats.modifiers,
            notes: Vec::new(),
            extra_notes: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Base attributes plus the clan's bonuses.
    pub fn effective_attributes(&self, clan: Option<&Clan>) -> Attributes {
        effective_attributes(&self.attributes, clan.map(|c| &c.bonuses))
    }

    /// Replace max values, armor class, proficiency and modifiers with freshly
    /// derived ones. Current hp/chakra are reset to the new maxima.
    pub fn apply_derived_stats(&mut self, stats: &CharacterStats) {
        self.hp = stats.max_hp;
        self.max_hp = stats.max_hp;
        self.chakra = stats.max_chakra;
        self.max_chakra = stats.max_chakra;
        self.armor_class = stats.armor_class;
        self.proficiency_bonus = stats.proficiency_bonus;
        self.modifiers = stats.modifiers;
    }
}

/// Input for creating a character (what the wizard collects).
#[derive(Debug, Clone, PartialEq)]
pub struct NewCharacter {
    pub name: CharacterName,
    pub clan_id: ClanId,
    pub class_id: ClassId,
    pub attributes: Attributes,
    pub description: CharacterDescription,
    pub equipment: Vec<EquipmentItem>,
    pub armor: Option<String>,
    pub weapons: Vec<EquipmentItem>,
    pub jutsus: Vec<Jutsu>,
}

/// Free-form descriptive block of a character.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharacterDescription {
    pub name: String,
    pub age: Option<u32>,
    pub rank: String,
    pub title: String,
    pub appearance: String,
    pub personality_traits: String,
    pub ideals: String,
    pub bonds: String,
    pub flaws: String,
}

/// An equipment or weapon stack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentItem {
    pub name: String,
    #[serde(default)]
    pub quantity: Quantity,
}

impl EquipmentItem {
    pub fn new(name: impl Into<String>, quantity: Quantity) -> Self {
        Self {
            name: name.into(),
            quantity,
        }
    }

    /// A single unit of the named item.
    pub fn single(name: impl Into<String>) -> Self {
        Self::new(name, Quantity::ONE)
    }
}

/// A named special ability with free-text mechanical details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Jutsu {
    pub name: String,
    #[serde(default)]
    pub details: String,
}

impl Jutsu {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            details: String::new(),
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = details.into();
        self
    }
}

/// A timestamped note attached to a character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Note {
    pub fn new(content: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: NoteId::new(),
            content: content.into(),
            created_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::Modifiers;

    fn stats() -> CharacterStats {
        CharacterStats {
            max_hp: 12,
            max_chakra: 10,
            armor_class: 12,
            proficiency_bonus: 3,
            modifiers: Modifiers::default(),
        }
    }

    fn new_character() -> NewCharacter {
        NewCharacter {
            name: CharacterName::new("Shikamaru").unwrap(),
            clan_id: ClanId::new("nara"),
            class_id: ClassId::new("strategist"),
            attributes: Attributes::default(),
            description: CharacterDescription::default(),
            equipment: vec![EquipmentItem::single("Kunai")],
            armor: None,
            weapons: vec![],
            jutsus: vec![Jutsu::new("Kagemane").with_details("Binds shadows")],
        }
    }

    #[test]
    fn create_starts_at_level_one_with_full_pools() {
        let now = Utc::now();
        let character = Character::create(new_character(), stats(), now);
        assert_eq!(character.level, 1);
        assert_eq!(character.xp, 0);
        assert_eq!(character.hp, 12);
        assert_eq!(character.max_chakra, 10);
        assert_eq!(character.condition, NORMAL_CONDITION);
        assert_eq!(character.created_at, now);
        assert_ne!(character.id.to_uuid(), character.share_id.to_uuid());
    }

    #[test]
    fn missing_optional_collections_default_to_empty() {
        let now = Utc::now();
        let character = Character::create(new_character(), stats(), now);
        let mut value = serde_json::to_value(&character).unwrap();
        let obj = value.as_object_mut().unwrap();
        for key in [
            "equipment",
            "weapons",
            "jutsus",
            "proficiencies",
            "notes",
            "condition",
            "extra_notes",
        ] {
            obj.remove(key);
        }

        let parsed: Character = serde_json::from_value(value).unwrap();
        assert!(parsed.equipment.is_empty());
        assert!(parsed.weapons.is_empty());
        assert!(parsed.jutsus.is_empty());
        assert!(parsed.proficiencies.is_empty());
        assert!(parsed.notes.is_empty());
        assert_eq!(parsed.condition, NORMAL_CONDITION);
    }

    #[test]
    fn equipment_quantity_defaults_to_one() {
        let item: EquipmentItem = serde_json::from_str(r#"{"name": "Shuriken"}"#).unwrap();
        assert_eq!(item.quantity.get(), 1);
        assert!(serde_json::from_str::<EquipmentItem>(r#"{"name": "X", "quantity": 0}"#).is_err());
    }
}
