//! Native platform implementations
//!
//! Provides the platform ports using tokio, the rand crate and tracing.

use std::time::Duration;

use async_trait::async_trait;

use crate::ports::outbound::{Notification, NotificationLevel, Notifier, RandomProvider, SleepProvider};

/// Random provider using the rand crate
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadRandomProvider;

impl RandomProvider for ThreadRandomProvider {
    fn random_range(&self, min: i32, max: i32) -> i32 {
        use rand::Rng;
        rand::thread_rng().gen_range(min..=max)
    }
}

/// Sleep provider backed by the tokio timer
#[derive(Clone, Copy, Debug, Default)]
pub struct TokioSleepProvider;

#[async_trait]
impl SleepProvider for TokioSleepProvider {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Notifier that only logs; used when no UI is attached.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        match notification.level {
            NotificationLevel::Success => tracing::info!(message = %notification.message, "notification"),
            NotificationLevel::Error => tracing::warn!(message = %notification.message, "notification"),
        }
    }
}
