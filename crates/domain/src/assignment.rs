//! Standard-array attribute assignment
//!
//! The six values {15, 14, 13, 12, 10, 8} are handed out one per attribute.
//! The mapping stays injective at every step: assigning a value takes it away
//! from whichever attribute held it, and re-assigning the same value to the
//! same attribute releases it.

use std::collections::BTreeMap;

use crate::error::DomainError;
use crate::value_objects::{Ability, Attributes, DEFAULT_ATTRIBUTE_SCORE};

pub const STANDARD_ARRAY: [i32; 6] = [15, 14, 13, 12, 10, 8];

/// Partial assignment of the standard array to attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StandardArrayAssignment {
    assigned: BTreeMap<Ability, i32>,
}

impl StandardArrayAssignment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a complete assignment from stored scores.
    ///
    /// Returns `None` unless the six scores are exactly a permutation of the
    /// standard array.
    pub fn from_attributes(attributes: &Attributes) -> Option<Self> {
        let mut scores: Vec<i32> = attributes.iter().map(|(_, score)| score).collect();
        scores.sort_unstable_by(|a, b| b.cmp(a));
        if scores != STANDARD_ARRAY {
            return None;
        }

        Some(Self {
            assigned: attributes.iter().collect(),
        })
    }

    /// Assign `value` to `ability`, or toggle it off when already held there.
    pub fn assign(&mut self, ability: Ability, value: i32) -> Result<(), DomainError> {
        if !STANDARD_ARRAY.contains(&value) {
            return Err(DomainError::validation(format!(
                "{} is not part of the standard array",
                value
            )));
        }

        if self.assigned.get(&ability) == Some(&value) {
            self.assigned.remove(&ability);
            return Ok(());
        }

        self.assigned.retain(|_, held| *held != value);
        self.assigned.insert(ability, value);
        Ok(())
    }

    pub fn value_of(&self, ability: Ability) -> Option<i32> {
        self.assigned.get(&ability).copied()
    }

    /// Attribute currently holding `value`, if any.
    pub fn holder_of(&self, value: i32) -> Option<Ability> {
        self.assigned
            .iter()
            .find(|(_, held)| **held == value)
            .map(|(ability, _)| *ability)
    }

    /// Values not yet handed out, in array order.
    pub fn available_values(&self) -> Vec<i32> {
        STANDARD_ARRAY
            .into_iter()
            .filter(|v| self.holder_of(*v).is_none())
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.assigned.len() == STANDARD_ARRAY.len()
    }

    pub fn clear(&mut self) {
        self.assigned.clear();
    }

    /// Scores with unassigned attributes reading as 10.
    pub fn attributes(&self) -> Attributes {
        let mut attributes = Attributes::uniform(DEFAULT_ATTRIBUTE_SCORE);
        for (ability, value) in &self.assigned {
            attributes.set(*ability, *value);
        }
        attributes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assigning_moves_value_between_attributes() {
        let mut assignment = StandardArrayAssignment::new();
        assignment.assign(Ability::Strength, 15).unwrap();
        assignment.assign(Ability::Dexterity, 15).unwrap();
        assert_eq!(assignment.value_of(Ability::Strength), None);
        assert_eq!(assignment.value_of(Ability::Dexterity), Some(15));
        assert_eq!(assignment.attributes().strength, 10);
    }

    #[test]
    fn reassigning_same_value_toggles_off() {
        let mut assignment = StandardArrayAssignment::new();
        assignment.assign(Ability::Wisdom, 14).unwrap();
        assignment.assign(Ability::Wisdom, 14).unwrap();
        assert_eq!(assignment.value_of(Ability::Wisdom), None);
        assert!(assignment.available_values().contains(&14));
    }

    #[test]
    fn new_value_releases_old_one() {
        let mut assignment = StandardArrayAssignment::new();
        assignment.assign(Ability::Charisma, 8).unwrap();
        assignment.assign(Ability::Charisma, 13).unwrap();
        assert_eq!(assignment.holder_of(8), None);
        assert_eq!(assignment.holder_of(13), Some(Ability::Charisma));
    }

    #[test]
    fn rejects_values_outside_array() {
        let mut assignment = StandardArrayAssignment::new();
        assert!(assignment.assign(Ability::Strength, 16).is_err());
        assert!(assignment.value_of(Ability::Strength).is_none());
    }

    #[test]
    fn from_attributes_accepts_only_a_permutation() {
        let attributes = Attributes {
            strength: 8,
            dexterity: 15,
            constitution: 14,
            intelligence: 10,
            wisdom: 12,
            charisma: 13,
        };
        let assignment = StandardArrayAssignment::from_attributes(&attributes).unwrap();
        assert!(assignment.is_complete());
        assert_eq!(assignment.holder_of(10), Some(Ability::Intelligence));
        assert_eq!(assignment.attributes(), attributes);

        assert!(StandardArrayAssignment::from_attributes(&Attributes::uniform(10)).is_none());
        let mut twice = attributes;
        twice.strength = 15;
        assert!(StandardArrayAssignment::from_attributes(&twice).is_none());
    }

    #[test]
    fn full_assignment_is_a_bijection() {
        let mut assignment = StandardArrayAssignment::new();
        for (ability, value) in Ability::ALL.into_iter().zip(STANDARD_ARRAY) {
            assignment.assign(ability, value).unwrap();
        }
        assert!(assignment.is_complete());
        assert!(assignment.available_values().is_empty());

        let mut scores: Vec<i32> = assignment.attributes().iter().map(|(_, s)| s).collect();
        scores.sort_unstable_by(|a, b| b.cmp(a));
        assert_eq!(scores, STANDARD_ARRAY.to_vec());
    }
}
