//! Read-only reference data lookups.

use std::sync::Arc;

use shinobi_domain::{Clan, ConditionSet, NinjaClass, ReferenceCatalog, XpTable};

#[derive(Debug, thiserror::Error)]
pub enum ReferenceError {
    #[error("Clã não encontrado")]
    ClanNotFound(String),
    #[error("Classe não encontrada")]
    ClassNotFound(String),
}

pub struct ReferenceQueries {
    catalog: Arc<ReferenceCatalog>,
}

impl ReferenceQueries {
    pub fn new(catalog: Arc<ReferenceCatalog>) -> Self {
        Self { catalog }
    }

    pub fn clans(&self) -> &[Clan] {
        &self.catalog.clans
    }

    pub fn clan(&self, id: &str) -> Result<&Clan, ReferenceError> {
        self.catalog
            .clan(id)
            .ok_or_else(|| ReferenceError::ClanNotFound(id.to_string()))
    }

    pub fn classes(&self) -> &[NinjaClass] {
        &self.catalog.classes
    }

    pub fn class(&self, id: &str) -> Result<&NinjaClass, ReferenceError> {
        self.catalog
            .class(id)
            .ok_or_else(|| ReferenceError::ClassNotFound(id.to_string()))
    }

    pub fn conditions(&self) -> &ConditionSet {
        &self.catalog.conditions
    }

    pub fn xp_table(&self) -> &XpTable {
        &self.catalog.xp_table
    }
}
