//! Shinobi Sheet Engine library.
//!
//! REST record store for Naruto RPG character sheets.
//!
//! ## Structure
//!
//! - `use_cases/` - Character, dice and reference data operations
//! - `infrastructure/` - External dependency implementations (ports + adapters)
//! - `api/` - HTTP entry points
//! - `app` - Application composition
//! - `config` - Environment-driven settings

pub mod api;
pub mod app;
pub mod config;
pub mod infrastructure;
pub mod use_cases;

pub use app::App;
pub use config::EngineConfig;
