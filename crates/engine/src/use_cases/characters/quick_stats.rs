//! Quick hp/chakra edits from the sheet header.

use std::sync::Arc;

use shinobi_shared::{QuickStatsRequest, QuickStatsResponse};

use super::{load_character, CharacterError, StatPolicy};
use crate::infrastructure::ports::{CharacterRepo, ClockPort};

pub struct UpdateQuickStats {
    repo: Arc<dyn CharacterRepo>,
    clock: Arc<dyn ClockPort>,
    policy: StatPolicy,
}

impl UpdateQuickStats {
    pub fn new(repo: Arc<dyn CharacterRepo>, clock: Arc<dyn ClockPort>, policy: StatPolicy) -> Self {
        Self {
            repo,
            clock,
            policy,
        }
    }

    /// Set current hp and/or chakra. Negative values are stored as 0.
    pub async fn execute(
        &self,
        id: &str,
        request: QuickStatsRequest,
    ) -> Result<QuickStatsResponse, CharacterError> {
        let mut character = load_character(self.repo.as_ref(), id).await?;

        if let Some(hp) = request.hp {
            character.hp = hp.max(0);
        }
        if let Some(chakra) = request.chakra {
            character.chakra = chakra.max(0);
        }
        self.policy.apply(&mut character);
        character.updated_at = self.clock.now();
        self.repo.save(&character).await?;

        tracing::debug!(
            character_id = %character.id,
            hp = character.hp,
            chakra = character.chakra,
            "Quick stats updated"
        );
        Ok(QuickStatsResponse {
            success: true,
            message: "Stats atualizados".to_string(),
        })
    }
}
