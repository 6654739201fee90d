//! Storage backend implementations.
//!
//! This module provides concrete implementations of the store traits defined
//! in `recordzone_core::storage`. The record store is selected at compile time
//! via feature flags.
//!
//! # Feature Flags
//!
//! - `inmemory` (default): volatile record store, paired with a volatile settings store
//! - `dynamodb`: AWS DynamoDB record store using `aws-sdk-dynamodb`, paired with the
//!   SQLite settings store
//!
//! These features are mutually exclusive - only one record store backend can be
//! enabled at a time. The in-memory stores are always compiled since the client
//! tests run against them.
//!
//! # Examples
//!
//! Build with the in-memory backend (default):
//! ```bash
//! cargo build -p recordzone
//! ```
//!
//! Build with DynamoDB:
//! ```bash
//! cargo build -p recordzone --no-default-features --features dynamodb
//! ```

// Compile-time checks for mutual exclusivity
#[cfg(all(feature = "inmemory", feature = "dynamodb"))]
compile_error!(
    "Features 'inmemory' and 'dynamodb' are mutually exclusive. \
    Enable only one record store backend at a time."
);

#[cfg(not(any(feature = "inmemory", feature = "dynamodb")))]
compile_error!(
    "No record store backend selected. Enable 'inmemory' or 'dynamodb' feature. \
    Example: cargo build -p recordzone --features inmemory"
);

pub mod inmemory;
pub mod sqlite;

#[cfg(feature = "dynamodb")]
pub mod dynamodb;
