//! Request bodies accepted by the REST API

use serde::{Deserialize, Deserializer, Serialize};

use shinobi_domain::{
    Attributes, CharacterDescription, CharacterName, ClanId, ClassId, DomainError, EquipmentItem,
    Jutsu, NewCharacter, Note,
};

/// `POST /api/characters`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateCharacterRequest {
    pub name: String,
    pub clan_id: String,
    pub class_id: String,
    pub attributes: Attributes,
    #[serde(default)]
    pub description: CharacterDescription,
    #[serde(default)]
    pub equipment: Vec<EquipmentItem>,
    #[serde(default)]
    pub armor: Option<String>,
    #[serde(default)]
    pub weapons: Vec<EquipmentItem>,
    #[serde(default)]
    pub jutsus: Vec<Jutsu>,
}

impl CreateCharacterRequest {
    /// Validate the wire payload into domain creation input.
    pub fn into_new_character(self) -> Result<NewCharacter, DomainError> {
        let name = CharacterName::new(self.name)?;
        self.attributes.validate()?;
        let clan_id = ClanId::new(self.clan_id);
        if clan_id.is_empty() {
            return Err(DomainError::validation("clan_id is required"));
        }
        let class_id = ClassId::new(self.class_id);
        if class_id.is_empty() {
            return Err(DomainError::validation("class_id is required"));
        }

        Ok(NewCharacter {
            name,
            clan_id,
            class_id,
            attributes: self.attributes,
            description: self.description,
            equipment: self.equipment,
            armor: self.armor,
            weapons: self.weapons,
            jutsus: self.jutsus,
        })
    }
}

/// `PUT /api/characters/{id}` - only present fields are applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateCharacterRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clan_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Attributes>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<CharacterDescription>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equipment: Option<Vec<EquipmentItem>>,
    /// Absent leaves the armor alone; `null` takes it off.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "present"
    )]
    pub armor: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weapons: Option<Vec<EquipmentItem>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jutsus: Option<Vec<Jutsu>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proficiencies: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xp: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hp: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_hp: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chakra: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_chakra: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub armor_class: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proficiency_bonus: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<Vec<Note>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_notes: Option<String>,
}

impl UpdateCharacterRequest {
    /// Whether the update touches anything that feeds stat derivation.
    pub fn affects_derived_stats(&self) -> bool {
        self.attributes.is_some()
            || self.level.is_some()
            || self.clan_id.is_some()
            || self.class_id.is_some()
    }

    /// Whether hp, chakra or armor class were typed in by hand.
    pub fn has_manual_stats(&self) -> bool {
        self.hp.is_some() || self.chakra.is_some() || self.armor_class.is_some()
    }

    /// Full-draft update used when an edit session commits.
    pub fn from_new_character(input: NewCharacter) -> Self {
        Self {
            name: Some(input.name.into()),
            clan_id: Some(input.clan_id.to_string()),
            class_id: Some(input.class_id.to_string()),
            attributes: Some(input.attributes),
            description: Some(input.description),
            equipment: Some(input.equipment),
            armor: Some(input.armor),
            weapons: Some(input.weapons),
            jutsus: Some(input.jutsus),
            ..Self::default()
        }
    }
}

/// A field that is present, even as `null`, deserializes to `Some`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// `PUT /api/characters/{id}/xp`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct XpUpdateRequest {
    pub xp: u32,
}

/// `PATCH /api/characters/{id}/quick-stats`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickStatsRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hp: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chakra: Option<i32>,
}

/// Query string of `POST /api/roll-dice`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceRollQuery {
    #[serde(default = "default_dice_type")]
    pub dice_type: String,
    #[serde(default = "default_dice_count")]
    pub count: i64,
}

fn default_dice_type() -> String {
    "d6".to_string()
}

fn default_dice_count() -> i64 {
    1
}

impl Default for DiceRollQuery {
    fn default() -> Self {
        Self {
            dice_type: default_dice_type(),
            count: default_dice_count(),
        }
    }
}
