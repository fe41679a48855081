//! Shinobi Sheet player crate.
//!
//! Client core for the character creator: a typed HTTP adapter for the
//! engine's record store, application services with the notification and
//! recovery policy, the seven-step creation wizard and the quick-stats
//! control. Rendering is left to the embedding application.

pub mod application;
pub mod client;
pub mod config;
pub mod infrastructure;
pub mod ports;
pub mod wizard;

pub use client::{ClientDeps, PlayerClient};
pub use config::PlayerConfig;
