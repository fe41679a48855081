//! Reference Service - clans, classes, conditions and the XP table
//!
//! Each list is fetched on its own. A failed fetch is logged and announced,
//! and that slot of the catalog falls back to the empty defaults so the
//! views can still render.

use std::sync::Arc;

use tracing::warn;

use shinobi_domain::{Clan, NinjaClass, ReferenceCatalog};

use crate::application::{Failure, FailureKind};
use crate::ports::outbound::{Notification, Notifier, RecordStorePort, StoreError};

const LOAD_ERROR: &str = "Erro ao carregar dados de referência";

/// A catalog assembled from the server plus what could not be fetched.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedReference {
    pub catalog: ReferenceCatalog,
    pub failures: Vec<Failure>,
}

impl LoadedReference {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

#[derive(Clone)]
pub struct ReferenceService {
    store: Arc<dyn RecordStorePort>,
    notifier: Arc<dyn Notifier>,
}

impl ReferenceService {
    pub fn new(store: Arc<dyn RecordStorePort>, notifier: Arc<dyn Notifier>) -> Self {
        Self { store, notifier }
    }

    /// Fetch everything, falling back per list. Announces at most once.
    pub async fn load_catalog(&self) -> LoadedReference {
        let defaults = ReferenceCatalog::empty();
        let mut failures = Vec::new();

        let (clans, classes, conditions, xp_table) = tokio::join!(
            self.store.list_clans(),
            self.store.list_classes(),
            self.store.conditions(),
            self.store.xp_table(),
        );

        let catalog = ReferenceCatalog {
            clans: fallback("clans", clans, defaults.clans, &mut failures),
            classes: fallback("classes", classes, defaults.classes, &mut failures),
            conditions: fallback("conditions", conditions, defaults.conditions, &mut failures),
            xp_table: fallback("xp_table", xp_table, defaults.xp_table, &mut failures),
        };

        if !failures.is_empty() {
            self.notifier.notify(Notification::error(LOAD_ERROR));
        }
        LoadedReference { catalog, failures }
    }

    /// Single clan, used when a stored character is opened.
    pub async fn clan(&self, id: &str) -> Result<Clan, Failure> {
        self.store.get_clan(id).await.map_err(|e| self.fail(e))
    }

    pub async fn class(&self, id: &str) -> Result<NinjaClass, Failure> {
        self.store.get_class(id).await.map_err(|e| self.fail(e))
    }

    fn fail(&self, error: StoreError) -> Failure {
        warn!(error = %error, "Reference lookup failed");
        self.notifier.notify(Notification::error(LOAD_ERROR));
        Failure::new(FailureKind::ReferenceData, error)
    }
}

fn fallback<T>(
    what: &str,
    result: Result<T, StoreError>,
    default: T,
    failures: &mut Vec<Failure>,
) -> T {
    match result {
        Ok(value) => value,
        Err(error) => {
            warn!(list = what, error = %error, "Reference fetch failed, using defaults");
            failures.push(Failure::new(FailureKind::ReferenceData, error));
            default
        }
    }
}
