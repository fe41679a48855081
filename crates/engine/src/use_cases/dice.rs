//! Server-side dice rolls.

use std::str::FromStr;
use std::sync::Arc;

use shinobi_domain::{DiceFormula, DieType};
use shinobi_shared::{DiceRollQuery, DiceRollResponse};

use crate::infrastructure::ports::RandomPort;

/// Most dice a single roll request may throw.
pub const MAX_DICE_PER_ROLL: u8 = 10;

#[derive(Debug, thiserror::Error)]
pub enum DiceError {
    #[error("Tipo de dado inválido")]
    InvalidDieType(String),
    #[error("Quantidade de dados inválida (1-10)")]
    InvalidCount(i64),
}

pub struct RollDice {
    random: Arc<dyn RandomPort>,
}

impl RollDice {
    pub fn new(random: Arc<dyn RandomPort>) -> Self {
        Self { random }
    }

    pub fn execute(&self, query: &DiceRollQuery) -> Result<DiceRollResponse, DiceError> {
        let die = DieType::from_str(&query.dice_type)
            .map_err(|_| DiceError::InvalidDieType(query.dice_type.clone()))?;
        let count = u8::try_from(query.count)
            .ok()
            .filter(|c| (1..=MAX_DICE_PER_ROLL).contains(c))
            .ok_or(DiceError::InvalidCount(query.count))?;

        let formula = DiceFormula::new(count, die.faces(), 0)
            .map_err(|_| DiceError::InvalidCount(query.count))?;
        let result = formula.roll_with(|min, max| self.random.gen_range(min, max));

        tracing::debug!(dice = %die, count, total = result.total, "Dice rolled");
        Ok(DiceRollResponse {
            dice_type: die.as_str().to_string(),
            count,
            rolls: result.individual_rolls,
            total: result.total,
        })
    }
}
