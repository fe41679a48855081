//! Ports - Interfaces the player core depends on.

pub mod outbound;
