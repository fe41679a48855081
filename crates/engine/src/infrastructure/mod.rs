//! Infrastructure - port traits and their adapters.

pub mod clock;
pub mod persistence;
pub mod ports;
