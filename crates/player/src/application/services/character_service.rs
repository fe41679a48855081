//! Character Service - list, load, edit, progress and delete characters
//!
//! Wraps the record store with the client's failure policy: every failed
//! call is logged, announced through the notifier and classified so the
//! caller knows whether to redirect, keep its edit state or fall back.

use std::sync::Arc;

use tracing::{info, warn};

use shinobi_domain::{Character, CharacterSheet};
use shinobi_shared::UpdateCharacterRequest;

use crate::application::{Failure, FailureKind};
use crate::ports::outbound::{Notification, Notifier, RecordStorePort, StoreError};
use crate::wizard::{CommitFailure, WizardMode, WizardSession};

/// Character service for managing stored characters
#[derive(Clone)]
pub struct CharacterService {
    store: Arc<dyn RecordStorePort>,
    notifier: Arc<dyn Notifier>,
}

impl CharacterService {
    pub fn new(store: Arc<dyn RecordStorePort>, notifier: Arc<dyn Notifier>) -> Self {
        Self { store, notifier }
    }

    /// Dashboard list.
    pub async fn list(&self) -> Result<Vec<Character>, Failure> {
        self.store
            .list_characters()
            .await
            .map_err(|e| self.fail(FailureKind::CharacterFetch, e, "Erro ao carregar personagens"))
    }

    pub async fn load(&self, id: &str) -> Result<Character, Failure> {
        self.store
            .get_character(id)
            .await
            .map_err(|e| self.fail(FailureKind::CharacterFetch, e, "Erro ao carregar personagem"))
    }

    /// Owner sheet view.
    pub async fn load_sheet(&self, id: &str) -> Result<CharacterSheet, Failure> {
        self.store
            .get_sheet(id)
            .await
            .map_err(|e| self.fail(FailureKind::CharacterFetch, e, "Erro ao carregar personagem"))
    }

    /// Read-only sheet behind a share link.
    pub async fn load_shared(&self, share_id: &str) -> Result<CharacterSheet, Failure> {
        self.store.get_shared_sheet(share_id).await.map_err(|e| {
            let message = match &e {
                StoreError::NotFound(_) => "Personagem não encontrado",
                _ => "Erro ao carregar personagem",
            };
            self.fail(FailureKind::CharacterFetch, e, message)
        })
    }

    /// Save from the advanced edit screen.
    pub async fn update(
        &self,
        id: &str,
        request: &UpdateCharacterRequest,
    ) -> Result<Character, Failure> {
        let character = self
            .store
            .update_character(id, request)
            .await
            .map_err(|e| self.fail(FailureKind::Save, e, "Erro ao salvar alterações"))?;
        info!(character_id = %character.id, "Character updated");
        self.notifier
            .notify(Notification::success("Personagem atualizado com sucesso!"));
        Ok(character)
    }

    pub async fn delete(&self, id: &str) -> Result<(), Failure> {
        self.store
            .delete_character(id)
            .await
            .map_err(|e| self.fail(FailureKind::Save, e, "Erro ao deletar personagem"))?;
        info!(character_id = %id, "Character deleted");
        self.notifier
            .notify(Notification::success("Personagem deletado com sucesso"));
        Ok(())
    }

    /// Set total XP; announces a level-up when the server reports one.
    pub async fn update_xp(&self, character: &Character, xp: u32) -> Result<Character, Failure> {
        let updated = self
            .store
            .update_xp(&character.id.to_string(), xp)
            .await
            .map_err(|e| self.fail(FailureKind::Save, e, "Erro ao atualizar XP"))?;

        if updated.level > character.level {
            info!(
                character_id = %updated.id,
                from = character.level,
                to = updated.level,
                "Level up"
            );
            self.notifier.notify(Notification::success(format!(
                "Parabéns! Subiu para o nível {}!",
                updated.level
            )));
        }
        Ok(updated)
    }

    /// Commit a finished wizard, announcing the outcome.
    pub async fn commit_wizard(&self, session: WizardSession) -> Result<Character, CommitFailure> {
        let editing = matches!(session.mode(), WizardMode::Edit { .. });
        match session.commit(self.store.as_ref()).await {
            Ok(character) => {
                let message = if editing {
                    "Personagem atualizado com sucesso!"
                } else {
                    "Personagem criado com sucesso!"
                };
                self.notifier.notify(Notification::success(message));
                Ok(character)
            }
            Err(failure) => {
                if failure.error.kind.notifies() {
                    let message = if editing {
                        "Erro ao atualizar personagem. Tente novamente."
                    } else {
                        "Erro ao criar personagem. Tente novamente."
                    };
                    self.notifier.notify(Notification::error(message));
                }
                Err(failure)
            }
        }
    }

    fn fail(&self, kind: FailureKind, error: StoreError, message: &str) -> Failure {
        warn!(error = %error, kind = ?kind, "{}", message);
        self.notifier.notify(Notification::error(message));
        Failure::new(kind, error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::Recovery;
    use crate::infrastructure::testing::{InMemoryRecordStore, RecordingNotifier};
    use crate::ports::outbound::{MockRecordStorePort, NotificationLevel};
    use crate::wizard::DraftPatch;

    fn service_with(store: Arc<dyn RecordStorePort>) -> (CharacterService, Arc<RecordingNotifier>) {
        let notifier = Arc::new(RecordingNotifier::new());
        (CharacterService::new(store, notifier.clone()), notifier)
    }

    fn finished_session() -> WizardSession {
        let mut session = WizardSession::new();
        session.apply(DraftPatch::clan("hyuga"));
        session.next();
        session.apply(DraftPatch::class("taijutsu_specialist"));
        session.next();
        session.next();
        session.apply(DraftPatch::name("Neji"));
        while session.next() {}
        session
    }

    #[tokio::test]
    async fn when_list_fails_then_error_is_announced() {
        let mut store = MockRecordStorePort::new();
        store
            .expect_list_characters()
            .returning(|| Err(StoreError::Transport("offline".into())));
        let (service, notifier) = service_with(Arc::new(store));

        let failure = service.list().await.unwrap_err();
        assert_eq!(failure.recovery(), Recovery::RedirectToDashboard);
        assert_eq!(notifier.messages(), vec!["Erro ao carregar personagens"]);
    }

    #[tokio::test]
    async fn when_share_link_is_unknown_then_not_found_is_announced() {
        let mut store = MockRecordStorePort::new();
        store
            .expect_get_shared_sheet()
            .withf(|share_id| share_id.to_string() == "missing")
            .returning(|_| Err(StoreError::NotFound("Personagem não encontrado".into())));
        let (service, notifier) = service_with(Arc::new(store));

        let failure = service.load_shared("missing").await.unwrap_err();
        assert!(failure.error.is_not_found());
        assert_eq!(notifier.messages(), vec!["Personagem não encontrado"]);
    }

    #[tokio::test]
    async fn wizard_commit_announces_creation() {
        let store = Arc::new(InMemoryRecordStore::default());
        let (service, notifier) = service_with(store.clone());

        let character = service.commit_wizard(finished_session()).await.unwrap();
        assert_eq!(character.name.as_str(), "Neji");
        assert_eq!(notifier.messages(), vec!["Personagem criado com sucesso!"]);
    }

    #[tokio::test]
    async fn when_wizard_commit_fails_then_draft_comes_back() {
        let store = Arc::new(InMemoryRecordStore::default());
        store.fail(
            "create_character",
            StoreError::Rejected {
                status: 500,
                detail: "boom".into(),
            },
        );
        let (service, notifier) = service_with(store.clone());

        let failure = service.commit_wizard(finished_session()).await.unwrap_err();
        assert_eq!(failure.session.draft().name, "Neji");
        assert_eq!(
            notifier.notifications()[0].level,
            NotificationLevel::Error
        );
        assert!(store.stored().is_empty());
    }

    #[tokio::test]
    async fn when_xp_crosses_threshold_then_level_up_is_announced() {
        let store = Arc::new(InMemoryRecordStore::default());
        let (service, notifier) = service_with(store.clone());
        let character = service.commit_wizard(finished_session()).await.unwrap();

        let updated = service.update_xp(&character, 300).await.unwrap();
        assert_eq!(updated.level, 2);
        assert!(notifier
            .messages()
            .contains(&"Parabéns! Subiu para o nível 2!".to_string()));

        let before = notifier.messages().len();
        service.update_xp(&updated, 350).await.unwrap();
        assert_eq!(notifier.messages().len(), before);
    }

    #[tokio::test]
    async fn when_delete_fails_then_record_is_kept() {
        let store = Arc::new(InMemoryRecordStore::default());
        let (service, notifier) = service_with(store.clone());
        let character = service.commit_wizard(finished_session()).await.unwrap();
        store.fail("delete_character", StoreError::Transport("timeout".into()));

        let failure = service.delete(&character.id.to_string()).await.unwrap_err();
        assert_eq!(failure.recovery(), Recovery::PreserveDraft);
        assert_eq!(store.stored().len(), 1);
        assert_eq!(
            notifier.messages().last().map(String::as_str),
            Some("Erro ao deletar personagem")
        );

        store.recover("delete_character");
        service.delete(&character.id.to_string()).await.unwrap();
        assert!(store.stored().is_empty());
    }

    #[tokio::test]
    async fn update_announces_success() {
        let store = Arc::new(InMemoryRecordStore::default());
        let (service, notifier) = service_with(store.clone());
        let character = service.commit_wizard(finished_session()).await.unwrap();

        let request = UpdateCharacterRequest {
            extra_notes: Some("Byakugan desperto".into()),
            ..UpdateCharacterRequest::default()
        };
        service
            .update(&character.id.to_string(), &request)
            .await
            .unwrap();
        assert_eq!(
            notifier.messages().last().map(String::as_str),
            Some("Personagem atualizado com sucesso!")
        );
    }
}
