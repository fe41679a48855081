//! Character sheet view
//!
//! The owner view and the share view render exactly this structure, so both
//! show the same effective attributes and modifiers for a character.

use serde::{Deserialize, Serialize};

use crate::entities::{Character, Clan, NinjaClass};
use crate::progression::{xp_progress, XpProgress, XpTable};
use crate::stats::modifiers;
use crate::value_objects::{Attributes, Modifiers};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterSheet {
    pub character: Character,
    /// Display name of the clan, falling back to the raw id
    pub clan_name: String,
    pub class_name: String,
    pub effective_attributes: Attributes,
    pub modifiers: Modifiers,
    pub xp_progress: XpProgress,
}

impl CharacterSheet {
    pub fn build(
        character: Character,
        clan: Option<&Clan>,
        class: Option<&NinjaClass>,
        xp_table: &XpTable,
    ) -> Self {
        let effective_attributes = character.effective_attributes(clan);
        let clan_name = clan
            .map(|c| c.name.clone())
            .unwrap_or_else(|| character.clan_id.to_string());
        let class_name = class
            .map(|c| c.name.clone())
            .unwrap_or_else(|| character.class_id.to_string());
        let xp_progress = xp_progress(character.level, character.xp, xp_table);
        Self {
            clan_name,
            class_name,
            modifiers: modifiers(&effective_attributes),
            effective_attributes,
            xp_progress,
            character,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{CharacterDescription, NewCharacter};
    use crate::ids::{ClanId, ClassId};
    use crate::reference::ReferenceCatalog;
    use crate::stats::character_stats;
    use crate::value_objects::CharacterName;
    use chrono::Utc;

    #[test]
    fn sheet_shows_clan_adjusted_scores() {
        let catalog = ReferenceCatalog::bundled();
        let clan = catalog.clan("uchiha");
        let class = catalog.class("hunter_ninja");
        let mut attributes = Attributes::default();
        attributes.dexterity = 14;
        let stats = character_stats(&attributes, clan, class, 1).unwrap();
        let character = Character::create(
            NewCharacter {
                name: CharacterName::new("Sasuke").unwrap(),
                clan_id: ClanId::new("uchiha"),
                class_id: ClassId::new("hunter_ninja"),
                attributes,
                description: CharacterDescription::default(),
                equipment: vec![],
                armor: None,
                weapons: vec![],
                jutsus: vec![],
            },
            stats,
            Utc::now(),
        );

        let sheet = CharacterSheet::build(character, clan, class, &catalog.xp_table);
        assert_eq!(sheet.effective_attributes.dexterity, 16);
        assert_eq!(sheet.modifiers.dexterity, 3);
        assert_eq!(sheet.clan_name, "Uchiha");
        assert_eq!(sheet.class_name, "Ninja Caçador");
        assert_eq!(sheet.xp_progress.next_level_xp, 300);
    }
}
