//! Quick-stats control - hp, chakra and condition from the sheet view
//!
//! The hp/chakra patch and the condition update are separate requests.
//! Each one reports its own outcome and toast; a failure of one never
//! rolls back the other.

use std::sync::Arc;

use tracing::{debug, warn};

use shinobi_domain::Character;
use shinobi_shared::{QuickStatsRequest, UpdateCharacterRequest};

use crate::application::{Failure, FailureKind};
use crate::ports::outbound::{Notification, Notifier, RecordStorePort};

/// Values the user typed into the quick-stats form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuickStatsEdit {
    pub hp: Option<i32>,
    pub chakra: Option<i32>,
    pub condition: Option<String>,
}

/// Per-request results. `None` means the request was not needed.
#[derive(Debug, Clone, PartialEq)]
pub struct QuickStatsOutcome {
    pub stats: Option<Result<(), Failure>>,
    pub condition: Option<Result<Character, Failure>>,
}

impl QuickStatsOutcome {
    pub fn all_succeeded(&self) -> bool {
        !matches!(self.stats, Some(Err(_))) && !matches!(self.condition, Some(Err(_)))
    }
}

#[derive(Clone)]
pub struct QuickStatsControl {
    store: Arc<dyn RecordStorePort>,
    notifier: Arc<dyn Notifier>,
}

impl QuickStatsControl {
    pub fn new(store: Arc<dyn RecordStorePort>, notifier: Arc<dyn Notifier>) -> Self {
        Self { store, notifier }
    }

    /// Send whatever changed relative to `character`.
    pub async fn save(&self, character: &Character, edit: QuickStatsEdit) -> QuickStatsOutcome {
        let id = character.id.to_string();
        let hp = edit.hp.filter(|hp| *hp != character.hp);
        let chakra = edit.chakra.filter(|chakra| *chakra != character.chakra);
        let condition = edit.condition.filter(|c| *c != character.condition);

        let stats_request = (hp.is_some() || chakra.is_some())
            .then_some(QuickStatsRequest { hp, chakra });

        let (stats, condition) = tokio::join!(
            async {
                match stats_request {
                    Some(request) => Some(self.patch_stats(&id, &request).await),
                    None => None,
                }
            },
            async {
                match condition {
                    Some(condition) => Some(self.set_condition(&id, condition).await),
                    None => None,
                }
            },
        );

        if stats.is_none() && condition.is_none() {
            debug!(character_id = %id, "Quick stats unchanged, nothing sent");
        }
        QuickStatsOutcome { stats, condition }
    }

    /// Condition select on its own.
    pub async fn set_condition(&self, id: &str, condition: String) -> Result<Character, Failure> {
        let request = UpdateCharacterRequest {
            condition: Some(condition),
            ..UpdateCharacterRequest::default()
        };
        match self.store.update_character(id, &request).await {
            Ok(character) => {
                self.notifier
                    .notify(Notification::success("Condição atualizada"));
                Ok(character)
            }
            Err(e) => {
                warn!(character_id = %id, error = %e, "Condition update failed");
                self.notifier
                    .notify(Notification::error("Erro ao atualizar condição"));
                Err(Failure::new(FailureKind::Save, e))
            }
        }
    }

    async fn patch_stats(&self, id: &str, request: &QuickStatsRequest) -> Result<(), Failure> {
        match self.store.update_quick_stats(id, request).await {
            Ok(()) => {
                self.notifier.notify(Notification::success("Stats atualizados"));
                Ok(())
            }
            Err(e) => {
                warn!(character_id = %id, error = %e, "Quick stats update failed");
                self.notifier.notify(Notification::error("Erro ao atualizar"));
                Err(Failure::new(FailureKind::Save, e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::testing::{InMemoryRecordStore, RecordingNotifier};
    use crate::ports::outbound::{MockRecordStorePort, StoreError};
    use crate::wizard::{DraftPatch, WizardSession};

    async fn stored_character(store: &InMemoryRecordStore) -> Character {
        let mut session = WizardSession::new();
        session.apply(DraftPatch::clan("akimichi"));
        session.next();
        session.apply(DraftPatch::class("taijutsu_specialist"));
        session.next();
        session.next();
        session.apply(DraftPatch::name("Choji"));
        while session.next() {}
        session.commit(store).await.unwrap()
    }

    #[tokio::test]
    async fn when_condition_fails_then_stats_still_saved() {
        let store = Arc::new(InMemoryRecordStore::default());
        let character = stored_character(&store).await;
        store.fail("update_character", StoreError::Transport("offline".into()));
        let notifier = Arc::new(RecordingNotifier::new());
        let control = QuickStatsControl::new(store.clone(), notifier.clone());

        let outcome = control
            .save(
                &character,
                QuickStatsEdit {
                    hp: Some(3),
                    chakra: None,
                    condition: Some("Envenenado".into()),
                },
            )
            .await;

        assert!(matches!(outcome.stats, Some(Ok(()))));
        assert!(matches!(outcome.condition, Some(Err(_))));
        assert!(!outcome.all_succeeded());

        let saved = &store.stored()[0];
        assert_eq!(saved.hp, 3);
        assert_eq!(saved.condition, "Normal");

        let messages = notifier.messages();
        assert!(messages.contains(&"Stats atualizados".to_string()));
        assert!(messages.contains(&"Erro ao atualizar condição".to_string()));
    }

    #[tokio::test]
    async fn when_stats_fail_then_condition_still_saved() {
        let store = Arc::new(InMemoryRecordStore::default());
        let character = stored_character(&store).await;
        store.fail("update_quick_stats", StoreError::Transport("offline".into()));
        let notifier = Arc::new(RecordingNotifier::new());
        let control = QuickStatsControl::new(store.clone(), notifier.clone());

        let outcome = control
            .save(
                &character,
                QuickStatsEdit {
                    hp: None,
                    chakra: Some(1),
                    condition: Some("Atordoado".into()),
                },
            )
            .await;

        assert!(matches!(outcome.stats, Some(Err(_))));
        let updated = outcome.condition.unwrap().unwrap();
        assert_eq!(updated.condition, "Atordoado");
        assert_eq!(updated.chakra, character.chakra);
        assert!(notifier.messages().contains(&"Erro ao atualizar".to_string()));
    }

    #[tokio::test]
    async fn when_nothing_changed_then_no_request_is_sent() {
        let mut store = MockRecordStorePort::new();
        store.expect_update_quick_stats().never();
        store.expect_update_character().never();
        let memory = InMemoryRecordStore::default();
        let character = stored_character(&memory).await;
        let notifier = Arc::new(RecordingNotifier::new());
        let control = QuickStatsControl::new(Arc::new(store), notifier.clone());

        let outcome = control
            .save(
                &character,
                QuickStatsEdit {
                    hp: Some(character.hp),
                    chakra: None,
                    condition: Some(character.condition.clone()),
                },
            )
            .await;

        assert_eq!(outcome.stats, None);
        assert!(outcome.condition.is_none());
        assert!(notifier.messages().is_empty());
    }

    #[tokio::test]
    async fn negative_hp_is_stored_as_zero() {
        let store = Arc::new(InMemoryRecordStore::default());
        let character = stored_character(&store).await;
        let control = QuickStatsControl::new(store.clone(), Arc::new(RecordingNotifier::new()));

        let outcome = control
            .save(
                &character,
                QuickStatsEdit {
                    hp: Some(-4),
                    ..QuickStatsEdit::default()
                },
            )
            .await;

        assert!(outcome.all_succeeded());
        assert_eq!(store.stored()[0].hp, 0);
    }
}
