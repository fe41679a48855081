//! Infrastructure - adapters for the outbound ports.

pub mod http_record_store;
pub mod platform;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use http_record_store::HttpRecordStore;
