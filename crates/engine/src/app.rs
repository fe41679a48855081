//! Application state and composition.

use std::sync::Arc;

use shinobi_domain::ReferenceCatalog;

use crate::infrastructure::{
    clock::{SystemClock, SystemRandom},
    ports::{CharacterRepo, ClockPort, RandomPort},
};
use crate::use_cases;

/// Main application state.
///
/// Holds the record store and use cases.
/// Passed to HTTP handlers via Axum state.
pub struct App {
    pub repositories: Repositories,
    pub use_cases: UseCases,
}

/// Container for repository ports.
pub struct Repositories {
    pub character: Arc<dyn CharacterRepo>,
}

/// Container for all use cases.
pub struct UseCases {
    pub characters: use_cases::CharacterUseCases,
    pub dice: use_cases::RollDice,
    pub reference: use_cases::ReferenceQueries,
}

impl App {
    /// Create a new App backed by the system clock and RNG.
    pub fn new(
        character_repo: Arc<dyn CharacterRepo>,
        reference: Arc<ReferenceCatalog>,
        policy: use_cases::StatPolicy,
    ) -> Self {
        Self::with_ports(
            character_repo,
            Arc::new(SystemClock),
            Arc::new(SystemRandom),
            reference,
            policy,
        )
    }

    /// Create an App with explicit clock and randomness ports.
    pub fn with_ports(
        character_repo: Arc<dyn CharacterRepo>,
        clock: Arc<dyn ClockPort>,
        random: Arc<dyn RandomPort>,
        reference: Arc<ReferenceCatalog>,
        policy: use_cases::StatPolicy,
    ) -> Self {
        let use_cases = UseCases {
            characters: use_cases::CharacterUseCases::new(
                character_repo.clone(),
                clock,
                reference.clone(),
                policy,
            ),
            dice: use_cases::RollDice::new(random),
            reference: use_cases::ReferenceQueries::new(reference),
        };

        Self {
            repositories: Repositories {
                character: character_repo,
            },
            use_cases,
        }
    }
}
