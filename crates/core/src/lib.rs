//! recordzone_core - domain types and storage contracts for recordzone.
//!
//! Everything in this crate is free of I/O: the `Customer` type, the pure
//! mapping between customers and raw records, and the traits that concrete
//! backends implement.

pub mod customer;
pub mod storage;
