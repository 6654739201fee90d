//! In-memory storage backend.
//!
//! Keeps zones, records and settings in HashMaps wrapped in `Arc<RwLock<_>>`.
//! Nothing is persisted. The record store can script faults per call kind,
//! which the client tests use to exercise error paths.
//!
//! # Example
//!
//! ```rust
//! use recordzone::storage::inmemory::{InMemoryRecordStore, InMemorySettingsStore};
//!
//! let store = InMemoryRecordStore::new().with_page_size(25);
//! let settings = InMemorySettingsStore::new();
//! ```

mod record_store;
mod settings;

pub use record_store::{Fault, InMemoryRecordStore, StoreCall, DEFAULT_PAGE_SIZE};
pub use settings::InMemorySettingsStore;
