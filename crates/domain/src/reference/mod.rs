//! Bundled reference data - clans, classes, conditions and the XP table
//!
//! Reference data is read-only and compiled into the crate. The engine serves
//! it verbatim; the player falls back to `ReferenceCatalog::empty()` when a
//! fetch fails.

mod clans;
mod classes;
mod conditions;

use serde::{Deserialize, Serialize};

use crate::entities::{Clan, ConditionSet, NinjaClass};
use crate::progression::XpTable;

/// All reference data in one place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceCatalog {
    pub clans: Vec<Clan>,
    pub classes: Vec<NinjaClass>,
    pub conditions: ConditionSet,
    pub xp_table: XpTable,
}

impl ReferenceCatalog {
    /// The data shipped with the game.
    pub fn bundled() -> Self {
        Self {
            clans: clans::bundled_clans(),
            classes: classes::bundled_classes(),
            conditions: conditions::bundled_conditions(),
            xp_table: XpTable::default(),
        }
    }

    /// Empty lists, `Normal` only and the standard XP table.
    pub fn empty() -> Self {
        Self {
            clans: Vec::new(),
            classes: Vec::new(),
            conditions: ConditionSet::new(Vec::<String>::new()),
            xp_table: XpTable::default(),
        }
    }

    pub fn clan(&self, id: &str) -> Option<&Clan> {
        self.clans.iter().find(|c| c.id.as_str() == id)
    }

    pub fn class(&self, id: &str) -> Option<&NinjaClass> {
        self.classes.iter().find(|c| c.id.as_str() == id)
    }
}

impl Default for ReferenceCatalog {
    fn default() -> Self {
        Self::bundled()
    }
}
