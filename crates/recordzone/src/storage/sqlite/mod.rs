//! SQLite settings backend.
//!
//! Durable local settings using `rusqlite` for synchronous access and
//! `tokio-rusqlite` for async wrapping.

mod error;
mod schema;
mod settings;

pub use settings::SqliteSettingsStore;
