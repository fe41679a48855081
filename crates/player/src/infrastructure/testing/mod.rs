//! Test doubles for the outbound ports
//!
//! Available in unit tests and, for downstream crates, behind the
//! `testing` feature.

mod fixtures;
mod in_memory_store;

pub use fixtures::{InstantSleep, RecordingNotifier, SequenceRandom};
pub use in_memory_store::InMemoryRecordStore;
