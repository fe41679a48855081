//! Client composition - wires adapters into services.

use std::sync::Arc;
use std::time::Duration;

use shinobi_domain::{Ability, AbilityRoll};

use crate::application::services::{
    CharacterService, DiceService, QuickStatsControl, ReferenceService,
};
use crate::application::Failure;
use crate::config::PlayerConfig;
use crate::infrastructure::platform::{ThreadRandomProvider, TokioSleepProvider, TracingNotifier};
use crate::infrastructure::HttpRecordStore;
use crate::ports::outbound::{Notifier, RandomProvider, RecordStorePort, SleepProvider};
use crate::wizard::{AttributeStep, WizardSession};

/// Ports a client is built from.
pub struct ClientDeps {
    pub store: Arc<dyn RecordStorePort>,
    pub random: Arc<dyn RandomProvider>,
    pub sleep: Arc<dyn SleepProvider>,
    pub notifier: Arc<dyn Notifier>,
    pub roll_delay: Duration,
}

/// Everything a presentation layer needs to drive the character creator.
#[derive(Clone)]
pub struct PlayerClient {
    pub characters: CharacterService,
    pub reference: ReferenceService,
    pub quick_stats: QuickStatsControl,
    pub dice: DiceService,
    random: Arc<dyn RandomProvider>,
    sleep: Arc<dyn SleepProvider>,
    roll_delay: Duration,
}

impl PlayerClient {
    /// HTTP store, thread RNG, tokio timer and log-only notifications.
    pub fn from_config(config: &PlayerConfig) -> Self {
        Self::new(ClientDeps {
            store: Arc::new(HttpRecordStore::from_config(config)),
            random: Arc::new(ThreadRandomProvider),
            sleep: Arc::new(TokioSleepProvider),
            notifier: Arc::new(TracingNotifier),
            roll_delay: config.roll_delay,
        })
    }

    pub fn new(deps: ClientDeps) -> Self {
        let ClientDeps {
            store,
            random,
            sleep,
            notifier,
            roll_delay,
        } = deps;

        Self {
            characters: CharacterService::new(store.clone(), notifier.clone()),
            reference: ReferenceService::new(store.clone(), notifier.clone()),
            quick_stats: QuickStatsControl::new(store.clone(), notifier.clone()),
            dice: DiceService::new(store, random.clone(), notifier),
            random,
            sleep,
            roll_delay,
        }
    }

    pub fn new_wizard(&self) -> WizardSession {
        WizardSession::new()
    }

    /// Roll one attribute with the configured delay.
    pub async fn roll_attribute(
        &self,
        step: &mut AttributeStep,
        ability: Ability,
    ) -> Result<AbilityRoll, Failure> {
        step.roll(
            ability,
            self.random.as_ref(),
            self.sleep.as_ref(),
            self.roll_delay,
        )
        .await
    }
}
