//! Character CRUD operations.

use std::sync::Arc;

use shinobi_domain::{
    character_stats, Character, CharacterName, ClanId, ClassId, Clan, NinjaClass, ReferenceCatalog,
    MAX_LEVEL,
};
use shinobi_shared::{CreateCharacterRequest, UpdateCharacterRequest};

use super::{load_character, load_shared_character, CharacterError, StatPolicy};
use crate::infrastructure::ports::{CharacterRepo, ClockPort};

pub struct CharacterCrud {
    repo: Arc<dyn CharacterRepo>,
    clock: Arc<dyn ClockPort>,
    reference: Arc<ReferenceCatalog>,
    policy: StatPolicy,
}

impl CharacterCrud {
    pub fn new(
        repo: Arc<dyn CharacterRepo>,
        clock: Arc<dyn ClockPort>,
        reference: Arc<ReferenceCatalog>,
        policy: StatPolicy,
    ) -> Self {
        Self {
            repo,
            clock,
            reference,
            policy,
        }
    }

    pub async fn list(&self) -> Result<Vec<Character>, CharacterError> {
        Ok(self.repo.list().await?)
    }

    pub async fn get(&self, id: &str) -> Result<Character, CharacterError> {
        load_character(self.repo.as_ref(), id).await
    }

    pub async fn get_shared(&self, share_id: &str) -> Result<Character, CharacterError> {
        load_shared_character(self.repo.as_ref(), share_id).await
    }

    /// Create a level-1 character with server-derived stats.
    pub async fn create(
        &self,
        request: CreateCharacterRequest,
    ) -> Result<Character, CharacterError> {
        let input = request.into_new_character()?;
        let clan = self.clan(&input.clan_id)?;
        let class = self.class(&input.class_id)?;

        let stats = character_stats(&input.attributes, Some(clan), Some(class), 1)?;
        let character = Character::create(input, stats, self.clock.now());
        self.repo.save(&character).await?;

        tracing::info!(
            character_id = %character.id,
            name = %character.name,
            clan_id = %character.clan_id,
            class_id = %character.class_id,
            "Character created"
        );
        Ok(character)
    }

    /// Apply a partial update.
    ///
    /// When attributes, level, clan or class change, derived stats are
    /// recomputed unless hp, chakra or armor class were supplied by hand.
    pub async fn update(
        &self,
        id: &str,
        request: UpdateCharacterRequest,
    ) -> Result<Character, CharacterError> {
        let mut character = load_character(self.repo.as_ref(), id).await?;
        let recompute = request.affects_derived_stats() && !request.has_manual_stats();

        if let Some(name) = request.name {
            character.name = CharacterName::new(name)?;
        }
        if let Some(clan_id) = request.clan_id {
            let clan_id = ClanId::new(clan_id);
            self.clan(&clan_id)?;
            character.clan_id = clan_id;
        }
        if let Some(class_id) = request.class_id {
            let class_id = ClassId::new(class_id);
            self.class(&class_id)?;
            character.class_id = class_id;
        }
        if let Some(attributes) = request.attributes {
            attributes.validate()?;
            character.attributes = attributes;
        }
        if let Some(level) = request.level {
            if !(1..=MAX_LEVEL).contains(&level) {
                return Err(CharacterError::InvalidInput(format!(
                    "level must be between 1 and {}, got {}",
                    MAX_LEVEL, level
                )));
            }
            character.level = level;
        }
        if let Some(condition) = request.condition {
            if !self.reference.conditions.contains(&condition) {
                return Err(CharacterError::InvalidInput(format!(
                    "Unknown condition: {}",
                    condition
                )));
            }
            character.condition = condition;
        }
        if let Some(description) = request.description {
            character.description = description;
        }
        if let Some(equipment) = request.equipment {
            character.equipment = equipment;
        }
        if let Some(armor) = request.armor {
            character.armor = armor;
        }
        if let Some(weapons) = request.weapons {
            character.weapons = weapons;
        }
        if let Some(jutsus) = request.jutsus {
            character.jutsus = jutsus;
        }
        if let Some(proficiencies) = request.proficiencies {
            character.proficiencies = proficiencies;
        }
        if let Some(xp) = request.xp {
            character.xp = xp;
        }
        if let Some(notes) = request.notes {
            character.notes = notes;
        }
        if let Some(extra_notes) = request.extra_notes {
            character.extra_notes = extra_notes;
        }

        if recompute {
            let clan = self.reference.clan(character.clan_id.as_str());
            let class = self.reference.class(character.class_id.as_str());
            let stats = character_stats(&character.attributes, clan, class, character.level)?;
            character.apply_derived_stats(&stats);
        }

        // Hand-entered values win over derived ones
        if let Some(hp) = request.hp {
            character.hp = hp;
        }
        if let Some(max_hp) = request.max_hp {
            character.max_hp = max_hp;
        }
        if let Some(chakra) = request.chakra {
            character.chakra = chakra;
        }
        if let Some(max_chakra) = request.max_chakra {
            character.max_chakra = max_chakra;
        }
        if let Some(armor_class) = request.armor_class {
            character.armor_class = armor_class;
        }
        if let Some(proficiency_bonus) = request.proficiency_bonus {
            character.proficiency_bonus = proficiency_bonus;
        }

        self.policy.apply(&mut character);
        character.updated_at = self.clock.now();
        self.repo.save(&character).await?;

        tracing::info!(character_id = %character.id, recomputed = recompute, "Character updated");
        Ok(character)
    }

    pub async fn delete(&self, id: &str) -> Result<(), CharacterError> {
        let character = load_character(self.repo.as_ref(), id).await?;
        if !self.repo.delete(character.id).await? {
            return Err(CharacterError::NotFound(id.to_string()));
        }
        tracing::info!(character_id = %character.id, "Character deleted");
        Ok(())
    }

    fn clan(&self, id: &ClanId) -> Result<&Clan, CharacterError> {
        self.reference
            .clan(id.as_str())
            .ok_or_else(|| CharacterError::ClanNotFound(id.to_string()))
    }

    fn class(&self, id: &ClassId) -> Result<&NinjaClass, CharacterError> {
        self.reference
            .class(id.as_str())
            .ok_or_else(|| CharacterError::ClassNotFound(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::clock::FixedClock;
    use crate::infrastructure::ports::MockCharacterRepo;
    use crate::use_cases::characters::test_support::{now, stored_character};
    use shinobi_domain::Attributes;

    fn crud(repo: MockCharacterRepo, policy: StatPolicy) -> CharacterCrud {
        CharacterCrud::new(
            Arc::new(repo),
            Arc::new(FixedClock(now())),
            Arc::new(ReferenceCatalog::bundled()),
            policy,
        )
    }

    fn repo_holding(character: Character) -> MockCharacterRepo {
        let mut repo = MockCharacterRepo::new();
        repo.expect_get()
            .returning(move |_| Ok(Some(character.clone())));
        repo
    }

    fn create_request(clan_id: &str) -> CreateCharacterRequest {
        CreateCharacterRequest {
            name: "Hinata".into(),
            clan_id: clan_id.into(),
            class_id: "genjutsu_specialist".into(),
            attributes: Attributes {
                strength: 8,
                dexterity: 14,
                constitution: 12,
                intelligence: 10,
                wisdom: 15,
                charisma: 13,
            },
            description: Default::default(),
            equipment: vec![],
            armor: None,
            weapons: vec![],
            jutsus: vec![],
        }
    }

    #[tokio::test]
    async fn when_created_then_stats_are_derived_from_clan_and_class() {
        let mut repo = MockCharacterRepo::new();
        repo.expect_save().times(1).returning(|_| Ok(()));

        let character = crud(repo, StatPolicy::default())
            .create(create_request("hyuga"))
            .await
            .unwrap();

        // Hyuga: DEX +1, WIS +2. Genjutsu specialist: d8 hit, d10 chakra.
        assert_eq!(character.level, 1);
        assert_eq!(character.xp, 0);
        assert_eq!(character.modifiers.dexterity, 2);
        assert_eq!(character.modifiers.wisdom, 3);
        assert_eq!(character.max_hp, 9);
        assert_eq!(character.hp, 9);
        assert_eq!(character.max_chakra, 11);
        assert_eq!(character.armor_class, 13);
        assert_eq!(character.proficiency_bonus, 3);
        assert_eq!(character.created_at, now());
    }

    #[tokio::test]
    async fn when_clan_is_unknown_then_create_fails_without_saving() {
        let repo = MockCharacterRepo::new();
        let result = crud(repo, StatPolicy::default())
            .create(create_request("senju"))
            .await;
        assert!(matches!(result, Err(CharacterError::ClanNotFound(_))));
    }

    #[tokio::test]
    async fn when_attributes_change_then_stats_are_recomputed() {
        let stored = stored_character();
        let id = stored.id.to_string();
        let mut repo = repo_holding(stored);
        repo.expect_save().returning(|_| Ok(()));

        let mut attributes = Attributes::default();
        attributes.constitution = 8;
        let updated = crud(repo, StatPolicy::default())
            .update(
                &id,
                UpdateCharacterRequest {
                    attributes: Some(attributes),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        // CON 8 + 2 (Uzumaki) = 10 -> +0; d8 hit, d10 chakra
        assert_eq!(updated.max_hp, 8);
        assert_eq!(updated.hp, 8);
        assert_eq!(updated.max_chakra, 10);
        assert_eq!(updated.modifiers.constitution, 0);
        assert_eq!(updated.updated_at, now());
    }

    #[tokio::test]
    async fn when_hp_is_supplied_by_hand_then_nothing_is_recomputed() {
        let stored = stored_character();
        let id = stored.id.to_string();
        let max_chakra = stored.max_chakra;
        let mut repo = repo_holding(stored);
        repo.expect_save().returning(|_| Ok(()));

        let updated = crud(repo, StatPolicy::default())
            .update(
                &id,
                UpdateCharacterRequest {
                    level: Some(5),
                    hp: Some(99),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.level, 5);
        assert_eq!(updated.hp, 99);
        assert_eq!(updated.max_chakra, max_chakra);
    }

    #[tokio::test]
    async fn when_clamping_is_enabled_then_current_hp_stays_under_max() {
        let stored = stored_character();
        let id = stored.id.to_string();
        let max_hp = stored.max_hp;
        let mut repo = repo_holding(stored);
        repo.expect_save().returning(|_| Ok(()));

        let policy = StatPolicy {
            clamp_current_to_max: true,
        };
        let updated = crud(repo, policy)
            .update(
                &id,
                UpdateCharacterRequest {
                    hp: Some(500),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.hp, max_hp);
    }

    #[tokio::test]
    async fn when_condition_is_unknown_then_update_is_rejected() {
        let stored = stored_character();
        let id = stored.id.to_string();
        let repo = repo_holding(stored);

        let result = crud(repo, StatPolicy::default())
            .update(
                &id,
                UpdateCharacterRequest {
                    condition: Some("Dançando".into()),
                    ..Default::default()
                },
            )
            .await;
        assert!(matches!(result, Err(CharacterError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn when_armor_is_sent_as_null_then_it_is_removed() {
        let mut stored = stored_character();
        stored.armor = Some("Colete Chunin".into());
        let id = stored.id.to_string();
        let mut repo = repo_holding(stored);
        repo.expect_save().returning(|_| Ok(()));
        let crud = crud(repo, StatPolicy::default());

        let untouched = crud
            .update(
                &id,
                UpdateCharacterRequest {
                    extra_notes: Some("Sem mudanças".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(untouched.armor.as_deref(), Some("Colete Chunin"));

        let cleared = crud
            .update(
                &id,
                UpdateCharacterRequest {
                    armor: Some(None),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(cleared.armor, None);
    }

    #[tokio::test]
    async fn when_id_is_malformed_then_character_is_not_found() {
        let repo = MockCharacterRepo::new();
        let result = crud(repo, StatPolicy::default()).get("not-a-uuid").await;
        assert!(matches!(result, Err(CharacterError::NotFound(_))));
    }
}
