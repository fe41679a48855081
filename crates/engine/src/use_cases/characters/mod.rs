//! Character use cases.
//!
//! Creation, edits, XP progression, quick-stat patches and the sheet view.
//! Derived stats are always computed here, never trusted from the client,
//! except where an update supplies them by hand.

mod crud;
mod error;
mod quick_stats;
mod sheet;
mod xp;

pub use crud::CharacterCrud;
pub use error::CharacterError;
pub use quick_stats::UpdateQuickStats;
pub use sheet::ViewSheet;
pub use xp::UpdateXp;

use std::str::FromStr;
use std::sync::Arc;

use shinobi_domain::{Character, CharacterId, ReferenceCatalog, ShareId};

use crate::infrastructure::ports::{CharacterRepo, ClockPort};

/// Write policy shared by the character use cases.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatPolicy {
    /// Keep current hp/chakra at or below their maxima after writes.
    pub clamp_current_to_max: bool,
}

impl StatPolicy {
    pub(crate) fn apply(&self, character: &mut Character) {
        if self.clamp_current_to_max {
            character.hp = character.hp.min(character.max_hp);
            character.chakra = character.chakra.min(character.max_chakra);
        }
    }
}

/// Container for character use cases.
pub struct CharacterUseCases {
    pub crud: CharacterCrud,
    pub xp: UpdateXp,
    pub quick_stats: UpdateQuickStats,
    pub sheet: ViewSheet,
}

impl CharacterUseCases {
    pub fn new(
        repo: Arc<dyn CharacterRepo>,
        clock: Arc<dyn ClockPort>,
        reference: Arc<ReferenceCatalog>,
        policy: StatPolicy,
    ) -> Self {
        Self {
            crud: CharacterCrud::new(repo.clone(), clock.clone(), reference.clone(), policy),
            xp: UpdateXp::new(repo.clone(), clock.clone(), reference.clone()),
            quick_stats: UpdateQuickStats::new(repo.clone(), clock, policy),
            sheet: ViewSheet::new(repo, reference),
        }
    }
}

/// Fetch a character by its path id. Malformed ids read as missing.
pub(crate) async fn load_character(
    repo: &dyn CharacterRepo,
    id: &str,
) -> Result<Character, CharacterError> {
    let Ok(character_id) = CharacterId::from_str(id) else {
        return Err(CharacterError::NotFound(id.to_string()));
    };
    repo.get(character_id)
        .await?
        .ok_or_else(|| CharacterError::NotFound(id.to_string()))
}

/// Fetch a character by its share id. Malformed ids read as missing.
pub(crate) async fn load_shared_character(
    repo: &dyn CharacterRepo,
    share_id: &str,
) -> Result<Character, CharacterError> {
    let Ok(parsed) = ShareId::from_str(share_id) else {
        return Err(CharacterError::NotFound(share_id.to_string()));
    };
    repo.get_by_share_id(parsed)
        .await?
        .ok_or_else(|| CharacterError::NotFound(share_id.to_string()))
}

#[cfg(test)]
pub(crate) mod test_support {
    use chrono::{DateTime, TimeZone, Utc};
    use shinobi_domain::{
        character_stats, Attributes, Character, CharacterDescription, CharacterName, ClanId,
        ClassId, NewCharacter, ReferenceCatalog,
    };

    pub fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
    }

    /// Level-1 Uzumaki medical ninja with CON 14 (16 with the clan bonus).
    pub fn stored_character() -> Character {
        let catalog = ReferenceCatalog::bundled();
        let mut attributes = Attributes::default();
        attributes.constitution = 14;
        let stats = character_stats(
            &attributes,
            catalog.clan("uzumaki"),
            catalog.class("medical_ninja"),
            1,
        )
        .unwrap();
        Character::create(
            NewCharacter {
                name: CharacterName::new("Karin").unwrap(),
                clan_id: ClanId::new("uzumaki"),
                class_id: ClassId::new("medical_ninja"),
                attributes,
                description: CharacterDescription::default(),
                equipment: vec![],
                armor: None,
                weapons: vec![],
                jutsus: vec![],
            },
            stats,
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        )
    }
}
