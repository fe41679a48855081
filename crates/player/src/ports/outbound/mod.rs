//! Outbound ports - Interfaces for external services
//!
//! These ports define the contracts that infrastructure adapters must implement,
//! allowing application services to interact with the record store and the
//! host platform without depending on concrete implementations.

pub mod platform;
pub mod record_store_port;

pub use platform::{Notification, NotificationLevel, Notifier, RandomProvider, SleepProvider};
pub use record_store_port::{RecordStorePort, StoreError};

#[cfg(test)]
pub use platform::{MockNotifier, MockRandomProvider, MockSleepProvider};
#[cfg(test)]
pub use record_store_port::MockRecordStorePort;
