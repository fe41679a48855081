//! Application layer - services and the failure policy.

pub mod error;
pub mod services;

pub use error::{Failure, FailureKind, Recovery, ServiceError};
