//! Attribute step - standard array or 4d6-drop-lowest rolls.

use std::collections::BTreeMap;
use std::time::Duration;

use tracing::debug;

use shinobi_domain::{
    effective_attribute, modifier, roll_ability_score, Ability, AbilityRoll, AttributeBonuses,
    Attributes, Clan, StandardArrayAssignment, DEFAULT_ATTRIBUTE_SCORE,
};

use crate::application::{Failure, FailureKind, ServiceError};
use crate::ports::outbound::{RandomProvider, SleepProvider};

use super::draft::DraftPatch;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AttributeMethod {
    #[default]
    StandardArray,
    Roll,
}

/// One row of the attribute table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributePreview {
    pub ability: Ability,
    pub base: i32,
    pub bonus: i32,
    pub total: i32,
    pub modifier: i32,
}

/// Local state of step 3 while the user assigns or rolls scores.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeStep {
    method: AttributeMethod,
    scores: Attributes,
    assignment: StandardArrayAssignment,
    rolls: BTreeMap<Ability, AbilityRoll>,
    bonuses: AttributeBonuses,
}

impl AttributeStep {
    /// Seed from the draft. Scores that form the whole standard array are
    /// taken as assigned so returning to the step shows them again; anything
    /// else starts with every value available.
    pub fn new(initial: Attributes, clan: Option<&Clan>) -> Self {
        let assignment = StandardArrayAssignment::from_attributes(&initial).unwrap_or_default();

        Self {
            method: AttributeMethod::StandardArray,
            scores: initial,
            assignment,
            rolls: BTreeMap::new(),
            bonuses: clan.map(|c| c.bonuses).unwrap_or_default(),
        }
    }

    pub fn set_clan(&mut self, clan: Option<&Clan>) {
        self.bonuses = clan.map(|c| c.bonuses).unwrap_or_default();
    }

    pub fn method(&self) -> AttributeMethod {
        self.method
    }

    /// Switching methods starts over from all 10s.
    pub fn set_method(&mut self, method: AttributeMethod) {
        self.method = method;
        self.scores = Attributes::uniform(DEFAULT_ATTRIBUTE_SCORE);
        self.assignment.clear();
        self.rolls.clear();
    }

    /// Hand out a standard-array value; assigning it twice releases it.
    pub fn assign(&mut self, ability: Ability, value: i32) -> Result<(), Failure> {
        if self.method != AttributeMethod::StandardArray {
            return Err(validation("Use o arranjo padrão para distribuir valores"));
        }
        self.assignment
            .assign(ability, value)
            .map_err(|e| validation(e.to_string()))?;
        self.scores = self.assignment.attributes();
        Ok(())
    }

    /// Type a score by hand after rolling.
    pub fn set_score(&mut self, ability: Ability, value: i32) -> Result<(), Failure> {
        if self.method != AttributeMethod::Roll {
            return Err(validation("Valores manuais só no modo de rolagem"));
        }
        if value < 1 {
            return Err(validation(format!("{ability} deve ser positivo")));
        }
        self.scores.set(ability, value);
        Ok(())
    }

    /// Roll 4d6, drop the lowest, after the configured suspense delay.
    ///
    /// Dropping the returned future before it completes leaves the step
    /// unchanged.
    pub async fn roll(
        &mut self,
        ability: Ability,
        random: &dyn RandomProvider,
        sleep: &dyn SleepProvider,
        delay: Duration,
    ) -> Result<AbilityRoll, Failure> {
        if self.method != AttributeMethod::Roll {
            return Err(validation("Selecione o modo de rolagem"));
        }

        sleep.sleep(delay).await;
        let roll = roll_ability_score(|min, max| random.random_range(min, max));
        debug!(
            ability = %ability,
            rolls = ?roll.rolls,
            dropped = roll.dropped,
            total = roll.total,
            "Attribute rolled"
        );

        self.scores.set(ability, roll.total);
        self.rolls.insert(ability, roll);
        Ok(roll)
    }

    pub fn last_roll(&self, ability: Ability) -> Option<&AbilityRoll> {
        self.rolls.get(&ability)
    }

    pub fn available_values(&self) -> Vec<i32> {
        self.assignment.available_values()
    }

    pub fn attributes(&self) -> Attributes {
        self.scores
    }

    pub fn preview(&self) -> Vec<AttributePreview> {
        self.scores
            .iter()
            .map(|(ability, base)| {
                let bonus = self.bonuses.get(ability);
                let total = effective_attribute(base, Some(bonus));
                AttributePreview {
                    ability,
                    base,
                    bonus,
                    total,
                    modifier: modifier(total),
                }
            })
            .collect()
    }

    pub fn into_patch(self) -> DraftPatch {
        DraftPatch::attributes(self.scores)
    }
}

fn validation(message: impl Into<String>) -> Failure {
    Failure::new(
        FailureKind::Validation,
        ServiceError::Validation(message.into()),
    )
}
