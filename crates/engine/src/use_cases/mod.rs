//! Use cases - User story orchestration.
//!
//! Each module contains use cases for a specific area of the character
//! creator. Use cases orchestrate the domain and the record store.

pub mod characters;
pub mod dice;
pub mod reference;

pub use characters::{CharacterUseCases, StatPolicy};
pub use dice::RollDice;
pub use reference::ReferenceQueries;
