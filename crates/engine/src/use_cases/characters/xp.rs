//! XP updates and level progression.

use std::sync::Arc;

use shinobi_domain::{character_stats, proficiency_bonus, Character, ReferenceCatalog};

use super::{load_character, CharacterError};
use crate::infrastructure::ports::{CharacterRepo, ClockPort};

/// Set a character's XP and level them up or down to match.
pub struct UpdateXp {
    repo: Arc<dyn CharacterRepo>,
    clock: Arc<dyn ClockPort>,
    reference: Arc<ReferenceCatalog>,
}

impl UpdateXp {
    pub fn new(
        repo: Arc<dyn CharacterRepo>,
        clock: Arc<dyn ClockPort>,
        reference: Arc<ReferenceCatalog>,
    ) -> Self {
        Self {
            repo,
            clock,
            reference,
        }
    }

    /// Store `xp`. On a level change, proficiency, maxima, armor class and
    /// modifiers follow the new level and current hp/chakra are capped at
    /// the new maxima.
    pub async fn execute(&self, id: &str, xp: u32) -> Result<Character, CharacterError> {
        let mut character = load_character(self.repo.as_ref(), id).await?;
        let old_level = character.level;
        let new_level = self.reference.xp_table.level_for_xp(xp);

        character.xp = xp;

        if new_level != old_level {
            character.level = new_level;
            character.proficiency_bonus = proficiency_bonus(new_level);

            let clan = self.reference.clan(character.clan_id.as_str());
            let class = self.reference.class(character.class_id.as_str());
            if let (Some(clan), Some(class)) = (clan, class) {
                let stats =
                    character_stats(&character.attributes, Some(clan), Some(class), new_level)?;
                character.max_hp = stats.max_hp;
                character.max_chakra = stats.max_chakra;
                character.hp = character.hp.min(stats.max_hp);
                character.chakra = character.chakra.min(stats.max_chakra);
                character.armor_class = stats.armor_class;
                character.modifiers = stats.modifiers;
            }
        }

        character.updated_at = self.clock.now();
        self.repo.save(&character).await?;

        tracing::info!(
            character_id = %character.id,
            xp,
            old_level,
            new_level,
            "Character XP updated"
        );
        Ok(character)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::clock::FixedClock;
    use crate::infrastructure::ports::MockCharacterRepo;
    use crate::use_cases::characters::test_support::{now, stored_character};

    fn use_case(stored: Character) -> UpdateXp {
        let mut repo = MockCharacterRepo::new();
        repo.expect_get()
            .returning(move |_| Ok(Some(stored.clone())));
        repo.expect_save().times(1).returning(|_| Ok(()));
        UpdateXp::new(
            Arc::new(repo),
            Arc::new(FixedClock(now())),
            Arc::new(ReferenceCatalog::bundled()),
        )
    }

    #[tokio::test]
    async fn when_xp_crosses_a_threshold_then_level_and_maxima_follow() {
        let stored = stored_character();
        let id = stored.id.to_string();
        let hp_before = stored.hp;

        let updated = use_case(stored).execute(&id, 6_500).await.unwrap();

        // CON 16 -> +3; d8 hit, d10 chakra; level 5
        assert_eq!(updated.level, 5);
        assert_eq!(updated.proficiency_bonus, 4);
        assert_eq!(updated.max_hp, 55);
        assert_eq!(updated.max_chakra, 65);
        assert_eq!(updated.hp, hp_before);
        assert_eq!(updated.armor_class, 12);
    }

    #[tokio::test]
    async fn when_level_drops_then_current_pools_are_capped() {
        let mut stored = stored_character();
        stored.level = 5;
        stored.xp = 6_500;
        stored.hp = 55;
        stored.max_hp = 55;
        stored.chakra = 65;
        stored.max_chakra = 65;
        let id = stored.id.to_string();

        let updated = use_case(stored).execute(&id, 0).await.unwrap();

        assert_eq!(updated.level, 1);
        assert_eq!(updated.max_hp, 11);
        assert_eq!(updated.hp, 11);
        assert_eq!(updated.chakra, 13);
    }

    #[tokio::test]
    async fn when_level_is_unchanged_then_only_xp_moves() {
        let stored = stored_character();
        let id = stored.id.to_string();
        let before = stored.clone();

        let updated = use_case(stored).execute(&id, 250).await.unwrap();

        assert_eq!(updated.xp, 250);
        assert_eq!(updated.level, 1);
        assert_eq!(updated.max_hp, before.max_hp);
        assert_eq!(updated.updated_at, now());
    }
}
