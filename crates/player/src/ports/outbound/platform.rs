//! Platform abstraction ports
//!
//! Randomness, delays and user-facing notifications are injected so the
//! wizard and services stay deterministic under test.

use std::time::Duration;

use async_trait::async_trait;

/// Random number generation abstraction
#[cfg_attr(test, mockall::automock)]
pub trait RandomProvider: Send + Sync {
    /// Generate random i32 in range [min, max] (inclusive)
    fn random_range(&self, min: i32, max: i32) -> i32;
}

/// Async sleep abstraction
///
/// Dropping the returned future cancels the wait.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SleepProvider: Send + Sync {
    async fn sleep(&self, duration: Duration);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Error,
}

/// A non-blocking message for the user (toast).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            message: message.into(),
        }
    }
}

#[cfg_attr(test, mockall::automock)]
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}
