//! Simple platform fakes used across unit tests.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use crate::ports::outbound::{Notification, Notifier, RandomProvider, SleepProvider};

/// Collects every notification for later assertions.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    seen: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.seen.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.notifications().into_iter().map(|n| n.message).collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.seen
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(notification);
    }
}

/// Replays a fixed sequence of values, repeating the last one.
#[derive(Debug)]
pub struct SequenceRandom {
    values: Mutex<VecDeque<i32>>,
    last: Mutex<i32>,
}

impl SequenceRandom {
    pub fn new(values: impl IntoIterator<Item = i32>) -> Self {
        Self {
            values: Mutex::new(values.into_iter().collect()),
            last: Mutex::new(1),
        }
    }
}

impl RandomProvider for SequenceRandom {
    fn random_range(&self, min: i32, max: i32) -> i32 {
        let mut last = self.last.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(next) = self
            .values
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .pop_front()
        {
            *last = next;
        }
        (*last).clamp(min, max)
    }
}

/// Sleep that resolves immediately and counts calls.
#[derive(Debug, Default)]
pub struct InstantSleep {
    calls: Mutex<Vec<Duration>>,
}

impl InstantSleep {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<Duration> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

#[async_trait]
impl SleepProvider for InstantSleep {
    async fn sleep(&self, duration: Duration) {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(duration);
    }
}
