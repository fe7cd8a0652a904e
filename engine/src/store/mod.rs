//! Persisted stores built on the [`Storage`](crate::storage::Storage) seam.
//!
//! Each store owns one storage key and one record. Corrupt or missing reads
//! fall back to the record's default; writes that fail are logged at warn
//! and play continues with the in-memory value.

pub mod achievements;
pub mod settings;
pub mod shop;
pub mod stats;
pub mod wallet;

pub use achievements::{Achievement, NotificationSink, NullSink, ACHIEVEMENTS};
pub use shop::ShopError;
