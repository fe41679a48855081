//! In-memory record store with the engine's derivation rules.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use shinobi_domain::{
    character_stats, proficiency_bonus, Character, CharacterSheet, Clan, ConditionSet,
    DiceFormula, DieType, NinjaClass, ReferenceCatalog, XpTable,
};
use shinobi_shared::{
    CreateCharacterRequest, DiceRollQuery, DiceRollResponse, QuickStatsRequest,
    UpdateCharacterRequest,
};

use crate::ports::outbound::{RecordStorePort, StoreError};

const NOT_FOUND: &str = "Personagem não encontrado";

/// Fake `RecordStorePort` for round-trip tests.
///
/// Individual operations can be made to fail with [`InMemoryRecordStore::fail`].
#[derive(Debug)]
pub struct InMemoryRecordStore {
    catalog: ReferenceCatalog,
    characters: Mutex<Vec<Character>>,
    failures: Mutex<HashMap<&'static str, StoreError>>,
    calls: Mutex<Vec<&'static str>>,
}

impl Default for InMemoryRecordStore {
    fn default() -> Self {
        Self::new(ReferenceCatalog::bundled())
    }
}

impl InMemoryRecordStore {
    pub fn new(catalog: ReferenceCatalog) -> Self {
        Self {
            catalog,
            characters: Mutex::new(Vec::new()),
            failures: Mutex::new(HashMap::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Make the named operation (the trait method name) fail until `recover`.
    pub fn fail(&self, operation: &'static str, error: StoreError) {
        self.failures
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(operation, error);
    }

    pub fn recover(&self, operation: &'static str) {
        self.failures
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .remove(operation);
    }

    /// Operations called so far, in order.
    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn stored(&self) -> Vec<Character> {
        self.characters
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    pub fn insert(&self, character: Character) {
        self.characters
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(character);
    }

    fn enter(&self, operation: &'static str) -> Result<(), StoreError> {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(operation);
        match self
            .failures
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(operation)
        {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }

    fn find(&self, matches: impl Fn(&Character) -> bool) -> Result<Character, StoreError> {
        self.characters
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .find(|c| matches(c))
            .cloned()
            .ok_or_else(|| StoreError::NotFound(NOT_FOUND.to_string()))
    }

    fn modify(
        &self,
        id: &str,
        change: impl FnOnce(&mut Character, &ReferenceCatalog) -> Result<(), StoreError>,
    ) -> Result<Character, StoreError> {
        let mut characters = self.characters.lock().unwrap_or_else(|e| e.into_inner());
        let character = characters
            .iter_mut()
            .find(|c| c.id.to_string() == id)
            .ok_or_else(|| StoreError::NotFound(NOT_FOUND.to_string()))?;
        change(character, &self.catalog)?;
        character.updated_at = Utc::now();
        Ok(character.clone())
    }

    fn sheet(&self, character: Character) -> CharacterSheet {
        let clan = self.catalog.clan(character.clan_id.as_str());
        let class = self.catalog.class(character.class_id.as_str());
        CharacterSheet::build(character, clan, class, &self.catalog.xp_table)
    }
}

fn rejected(detail: impl ToString) -> StoreError {
    StoreError::Rejected {
        status: 400,
        detail: detail.to_string(),
    }
}

#[async_trait]
impl RecordStorePort for InMemoryRecordStore {
    async fn list_clans(&self) -> Result<Vec<Clan>, StoreError> {
        self.enter("list_clans")?;
        Ok(self.catalog.clans.clone())
    }

    async fn get_clan(&self, id: &str) -> Result<Clan, StoreError> {
        self.enter("get_clan")?;
        self.catalog
            .clan(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound("Clã não encontrado".to_string()))
    }

    async fn list_classes(&self) -> Result<Vec<NinjaClass>, StoreError> {
        self.enter("list_classes")?;
        Ok(self.catalog.classes.clone())
    }

    async fn get_class(&self, id: &str) -> Result<NinjaClass, StoreError> {
        self.enter("get_class")?;
        self.catalog
            .class(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound("Classe não encontrada".to_string()))
    }

    async fn conditions(&self) -> Result<ConditionSet, StoreError> {
        self.enter("conditions")?;
        Ok(self.catalog.conditions.clone())
    }

    async fn xp_table(&self) -> Result<XpTable, StoreError> {
        self.enter("xp_table")?;
        Ok(self.catalog.xp_table.clone())
    }

    async fn list_characters(&self) -> Result<Vec<Character>, StoreError> {
        self.enter("list_characters")?;
        let mut characters = self.stored();
        characters.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(characters)
    }

    async fn get_character(&self, id: &str) -> Result<Character, StoreError> {
        self.enter("get_character")?;
        self.find(|c| c.id.to_string() == id)
    }

    async fn get_shared_character(&self, share_id: &str) -> Result<Character, StoreError> {
        self.enter("get_shared_character")?;
        self.find(|c| c.share_id.to_string() == share_id)
    }

    async fn create_character(
        &self,
        request: &CreateCharacterRequest,
    ) -> Result<Character, StoreError> {
        self.enter("create_character")?;
        let input = request.clone().into_new_character().map_err(rejected)?;
        let clan = self
            .catalog
            .clan(input.clan_id.as_str())
            .ok_or_else(|| StoreError::NotFound("Clã não encontrado".to_string()))?;
        let class = self
            .catalog
            .class(input.class_id.as_str())
            .ok_or_else(|| StoreError::NotFound("Classe não encontrada".to_string()))?;
        let stats =
            character_stats(&input.attributes, Some(clan), Some(class), 1).map_err(rejected)?;

        let character = Character::create(input, stats, Utc::now());
        self.insert(character.clone());
        Ok(character)
    }

    async fn update_character(
        &self,
        id: &str,
        request: &UpdateCharacterRequest,
    ) -> Result<Character, StoreError> {
        self.enter("update_character")?;
        let request = request.clone();
        self.modify(id, move |character, catalog| {
            if let Some(name) = request.name.clone() {
                character.name = name.try_into().map_err(rejected)?;
            }
            if let Some(condition) = &request.condition {
                if !catalog.conditions.contains(condition) {
                    return Err(rejected(format!("Unknown condition: {condition}")));
                }
                character.condition = condition.clone();
            }
            if let Some(clan_id) = &request.clan_id {
                character.clan_id = clan_id.as_str().into();
            }
            if let Some(class_id) = &request.class_id {
                character.class_id = class_id.as_str().into();
            }
            if let Some(attributes) = request.attributes {
                character.attributes = attributes;
            }
            if let Some(description) = request.description.clone() {
                character.description = description;
            }
            if let Some(equipment) = request.equipment.clone() {
                character.equipment = equipment;
            }
            if let Some(armor) = request.armor.clone() {
                character.armor = armor;
            }
            if let Some(weapons) = request.weapons.clone() {
                character.weapons = weapons;
            }
            if let Some(jutsus) = request.jutsus.clone() {
                character.jutsus = jutsus;
            }
            if request.affects_derived_stats() && !request.has_manual_stats() {
                let stats = character_stats(
                    &character.attributes,
                    catalog.clan(character.clan_id.as_str()),
                    catalog.class(character.class_id.as_str()),
                    character.level,
                )
                .map_err(rejected)?;
                character.apply_derived_stats(&stats);
            }
            if let Some(hp) = request.hp {
                character.hp = hp;
            }
            if let Some(chakra) = request.chakra {
                character.chakra = chakra;
            }
            Ok(())
        })
    }

    async fn delete_character(&self, id: &str) -> Result<(), StoreError> {
        self.enter("delete_character")?;
        let mut characters = self.characters.lock().unwrap_or_else(|e| e.into_inner());
        let before = characters.len();
        characters.retain(|c| c.id.to_string() != id);
        if characters.len() == before {
            return Err(StoreError::NotFound(NOT_FOUND.to_string()));
        }
        Ok(())
    }

    async fn get_sheet(&self, id: &str) -> Result<CharacterSheet, StoreError> {
        self.enter("get_sheet")?;
        let character = self.find(|c| c.id.to_string() == id)?;
        Ok(self.sheet(character))
    }

    async fn get_shared_sheet(&self, share_id: &str) -> Result<CharacterSheet, StoreError> {
        self.enter("get_shared_sheet")?;
        let character = self.find(|c| c.share_id.to_string() == share_id)?;
        Ok(self.sheet(character))
    }

    async fn update_quick_stats(
        &self,
        id: &str,
        request: &QuickStatsRequest,
    ) -> Result<(), StoreError> {
        self.enter("update_quick_stats")?;
        let request = *request;
        self.modify(id, move |character, _| {
            if let Some(hp) = request.hp {
                character.hp = hp.max(0);
            }
            if let Some(chakra) = request.chakra {
                character.chakra = chakra.max(0);
            }
            Ok(())
        })
        .map(|_| ())
    }

    async fn update_xp(&self, id: &str, xp: u32) -> Result<Character, StoreError> {
        self.enter("update_xp")?;
        self.modify(id, move |character, catalog| {
            let level = catalog.xp_table.level_for_xp(xp);
            character.xp = xp;
            if level != character.level {
                character.level = level;
                character.proficiency_bonus = proficiency_bonus(level);
            }
            Ok(())
        })
    }

    async fn roll_dice(&self, query: &DiceRollQuery) -> Result<DiceRollResponse, StoreError> {
        self.enter("roll_dice")?;
        let die: DieType = query
            .dice_type
            .parse()
            .map_err(|_| rejected("Tipo de dado inválido"))?;
        let count = u8::try_from(query.count)
            .ok()
            .filter(|c| (1..=10).contains(c))
            .ok_or_else(|| rejected("Quantidade de dados inválida (1-10)"))?;
        let formula = DiceFormula::new(count, die.faces(), 0).map_err(rejected)?;
        // Always the highest face; deterministic for tests
        let result = formula.roll_with(|_, max| max);
        Ok(DiceRollResponse {
            dice_type: die.as_str().to_string(),
            count,
            rolls: result.individual_rolls,
            total: result.total,
        })
    }
}
