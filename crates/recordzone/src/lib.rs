//! recordzone - customer records in a zoned remote record store.
//!
//! The [`client::RecordStoreClient`] lazily provisions the customer zone and
//! exposes list, save and delete over any `RecordStore` backend.

pub mod cli;
pub mod client;
pub mod config;
pub mod demo;
pub mod error;
pub mod output;
pub mod storage;

pub use client::RecordStoreClient;
pub use config::Config;
pub use error::{ClientError, Operation, Result};
