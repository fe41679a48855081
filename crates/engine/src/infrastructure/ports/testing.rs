//! Time and randomness, injected so derived timestamps and dice are
//! deterministic under test.

use chrono::{DateTime, Utc};

#[cfg_attr(test, mockall::automock)]
pub trait ClockPort: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

pub trait RandomPort: Send + Sync {
    /// Uniform integer in `min..=max`, both ends inclusive.
    fn gen_range(&self, min: i32, max: i32) -> i32;
}
