//! Port traits for infrastructure boundaries.
//!
//! The character document store, the clock and the dice RNG. Use cases
//! hold these as `Arc<dyn ..>`; everything else is concrete.

mod error;
mod repos;
mod testing;

pub use error::RepoError;
pub use repos::CharacterRepo;
pub use testing::{ClockPort, RandomPort};

#[cfg(test)]
pub use repos::MockCharacterRepo;
#[cfg(test)]
pub use testing::MockClockPort;
