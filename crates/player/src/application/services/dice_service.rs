//! Dice Service - the sheet's dice roller.
//!
//! Rolls locally with the injected random provider; `roll_on_server` asks
//! the engine instead, for tables that want a shared result.

use std::sync::Arc;

use tracing::{debug, warn};

use shinobi_domain::{DiceFormula, DiceRollResult, DieType};
use shinobi_shared::{DiceRollQuery, DiceRollResponse};

use crate::application::ServiceError;
use crate::ports::outbound::{Notification, Notifier, RandomProvider, RecordStorePort};

/// Upper bound on dice per roll, same as the engine.
pub const MAX_DICE: u8 = 10;

#[derive(Clone)]
pub struct DiceService {
    store: Arc<dyn RecordStorePort>,
    random: Arc<dyn RandomProvider>,
    notifier: Arc<dyn Notifier>,
}

impl DiceService {
    pub fn new(
        store: Arc<dyn RecordStorePort>,
        random: Arc<dyn RandomProvider>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            store,
            random,
            notifier,
        }
    }

    pub fn roll(&self, die: DieType, count: u8) -> Result<DiceRollResult, ServiceError> {
        if !(1..=MAX_DICE).contains(&count) {
            return Err(ServiceError::Validation(
                "Quantidade de dados inválida (1-10)".to_string(),
            ));
        }
        let formula = DiceFormula::new(count, die.faces(), 0)
            .map_err(|e| ServiceError::Validation(e.to_string()))?;
        let result = formula.roll_with(|min, max| self.random.random_range(min, max));
        debug!(die = %die, count, total = result.total, "Dice rolled");
        Ok(result)
    }

    pub async fn roll_on_server(
        &self,
        die: DieType,
        count: u8,
    ) -> Result<DiceRollResponse, ServiceError> {
        let query = DiceRollQuery {
            dice_type: die.as_str().to_string(),
            count: i64::from(count),
        };
        self.store.roll_dice(&query).await.map_err(|e| {
            warn!(error = %e, "Server dice roll failed");
            self.notifier.notify(Notification::error("Erro ao rolar dados"));
            ServiceError::from(e)
        })
    }
}
