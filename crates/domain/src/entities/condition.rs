//! Conditions a character can be in

use serde::{Deserialize, Serialize};

use crate::entities::character::NORMAL_CONDITION;

/// Named conditions accepted on a character sheet. `Normal` is always first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConditionSet(Vec<String>);

impl ConditionSet {
    /// Build a set, ensuring `Normal` leads and duplicates are dropped.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut list = vec![NORMAL_CONDITION.to_string()];
        for name in names {
            let name = name.into();
            if !list.iter().any(|existing| existing == &name) {
                list.push(name);
            }
        }
        Self(list)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|c| c == name)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normal_is_always_first() {
        let set = ConditionSet::new(["Cego", "Normal", "Cego"]);
        assert_eq!(set.as_slice(), &["Normal".to_string(), "Cego".to_string()]);
        assert!(set.contains("Cego"));
        assert!(!set.contains("cego"));
    }
}
