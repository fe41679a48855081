//! Application services
//!
//! Use cases for the Shinobi Sheet client. Services depend on the outbound
//! port traits only and apply the client's failure policy: log, notify,
//! classify.

pub mod character_service;
pub mod dice_service;
pub mod quick_stats;
pub mod reference_service;

pub use character_service::CharacterService;
pub use dice_service::DiceService;
pub use quick_stats::{QuickStatsControl, QuickStatsEdit, QuickStatsOutcome};
pub use reference_service::{LoadedReference, ReferenceService};
