//! Wizard session - the seven-step creation/edit flow
//!
//! A session owns one draft and a current step. Navigation is clamped to
//! the step range and forward moves are guarded by the fields each step
//! requires. Commit consumes the session; on failure the untouched session
//! comes back inside the error so the user can retry from the summary.

use tracing::{debug, info, warn};

use shinobi_domain::{
    derived_combat_stats, effective_attributes, modifiers, proficiency_bonus, Attributes,
    Character, CharacterId, CombatStats, Modifiers, ReferenceCatalog, STARTING_LEVEL,
};

use crate::application::{Failure, FailureKind, ServiceError};
use crate::ports::outbound::RecordStorePort;

use super::draft::{CharacterDraft, DraftPatch};
use super::step::WizardStep;

/// Whether commit creates a new record or replaces an existing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardMode {
    Create,
    Edit { id: CharacterId },
}

/// Level-1 numbers shown on the summary step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryPreview {
    pub effective_attributes: Attributes,
    pub modifiers: Modifiers,
    pub combat: CombatStats,
    pub proficiency_bonus: i32,
}

/// Returned by a failed commit; holds the session unchanged.
#[derive(Debug, thiserror::Error)]
#[error("{error}")]
pub struct CommitFailure {
    pub session: WizardSession,
    pub error: Failure,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WizardSession {
    mode: WizardMode,
    step: WizardStep,
    draft: CharacterDraft,
}

impl Default for WizardSession {
    fn default() -> Self {
        Self::new()
    }
}

impl WizardSession {
    /// Fresh creation flow at step 1 with a default draft.
    pub fn new() -> Self {
        Self {
            mode: WizardMode::Create,
            step: WizardStep::FIRST,
            draft: CharacterDraft::default(),
        }
    }

    /// Edit flow seeded from a stored character.
    pub fn for_edit(character: &Character) -> Self {
        Self {
            mode: WizardMode::Edit { id: character.id },
            step: WizardStep::FIRST,
            draft: CharacterDraft::from_character(character),
        }
    }

    pub fn mode(&self) -> &WizardMode {
        &self.mode
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn draft(&self) -> &CharacterDraft {
        &self.draft
    }

    /// Check the fields the current step requires.
    pub fn validate_step(&self) -> Result<(), Failure> {
        let missing = match self.step {
            WizardStep::Clan if self.draft.clan_id.trim().is_empty() => Some("Selecione um clã"),
            WizardStep::Class if self.draft.class_id.trim().is_empty() => {
                Some("Selecione uma classe")
            }
            WizardStep::Description if self.draft.name.trim().is_empty() => {
                Some("Informe o nome do personagem")
            }
            _ => None,
        };

        match missing {
            Some(message) => Err(Failure::new(
                FailureKind::Validation,
                ServiceError::Validation(message.to_string()),
            )),
            None => Ok(()),
        }
    }

    pub fn can_advance(&self) -> bool {
        self.step != WizardStep::LAST && self.validate_step().is_ok()
    }

    /// Move forward one step. Returns false when blocked or already last.
    pub fn next(&mut self) -> bool {
        if !self.can_advance() {
            debug!(step = self.step.number(), "Wizard advance blocked");
            return false;
        }
        self.step = self.step.next();
        true
    }

    /// Move back one step. Never guarded.
    pub fn prev(&mut self) -> bool {
        let previous = self.step.prev();
        let moved = previous != self.step;
        self.step = previous;
        moved
    }

    pub fn apply(&mut self, patch: DraftPatch) {
        self.draft.apply(patch);
    }

    /// Level-1 stats for the current draft, once clan and class resolve.
    pub fn preview(&self, catalog: &ReferenceCatalog) -> Option<SummaryPreview> {
        let clan = catalog.clan(&self.draft.clan_id)?;
        let class = catalog.class(&self.draft.class_id)?;

        let effective = effective_attributes(&self.draft.attributes, Some(&clan.bonuses));
        let mods = modifiers(&effective);
        let prof = proficiency_bonus(STARTING_LEVEL);
        let combat = derived_combat_stats(
            &class.hit_die,
            &class.chakra_die,
            mods.constitution,
            mods.dexterity,
            prof,
        )
        .ok()?;

        Some(SummaryPreview {
            effective_attributes: effective,
            modifiers: mods,
            combat,
            proficiency_bonus: prof,
        })
    }

    /// Send the draft to the store. Only allowed from the summary step.
    pub async fn commit(self, store: &dyn RecordStorePort) -> Result<Character, CommitFailure> {
        if self.step != WizardStep::Summary {
            let error = Failure::new(
                FailureKind::Validation,
                ServiceError::Validation("Conclua todas as etapas antes de salvar".to_string()),
            );
            return Err(CommitFailure {
                session: self,
                error,
            });
        }

        let result = match &self.mode {
            WizardMode::Create => store.create_character(&self.draft.to_create_request()).await,
            WizardMode::Edit { id } => {
                store
                    .update_character(&id.to_string(), &self.draft.to_update_request())
                    .await
            }
        };

        match result {
            Ok(character) => {
                info!(character_id = %character.id, name = %character.name, "Wizard committed");
                Ok(character)
            }
            Err(e) => {
                warn!(error = %e, "Wizard commit failed, draft kept");
                Err(CommitFailure {
                    session: self,
                    error: Failure::new(FailureKind::Save, e),
                })
            }
        }
    }

    /// Abandon the flow. The draft is dropped and nothing is sent.
    pub fn discard(self) {
        debug!(step = self.step.number(), "Wizard discarded");
    }
}
