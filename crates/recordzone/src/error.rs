//! Client error types.

use std::fmt;

use recordzone_core::storage::exit_codes::EX_TEMPFAIL;
use recordzone_core::storage::{store_error_to_exit_code, StoreError};
use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// The client operation a failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    EnsureZone,
    List,
    Save,
    Delete,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::EnsureZone => "ensure zone",
            Operation::List => "list customers",
            Operation::Save => "save customer",
            Operation::Delete => "delete customer",
        };
        f.write_str(name)
    }
}

/// A store failure tagged with the operation that hit it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{operation} failed: {source}")]
pub struct ClientError {
    pub operation: Operation,
    #[source]
    pub source: StoreError,
}

impl ClientError {
    pub fn new(operation: Operation, source: StoreError) -> Self {
        Self { operation, source }
    }

    /// Returns a closure that tags a store error with `operation`, for use with `map_err`.
    pub fn tag(operation: Operation) -> impl Fn(StoreError) -> Self {
        move |source| Self::new(operation, source)
    }
}

/// Exit code for any other failure.
pub const EX_FAILURE: u8 = 1;

/// Maps an error reaching the binary edge to a process exit code.
///
/// Store failures, with or without an operation tag, use
/// [`store_error_to_exit_code`]. An elapsed operation timeout maps to `EX_TEMPFAIL`.
pub fn exit_code(err: &anyhow::Error) -> u8 {
    if let Some(client_error) = err.downcast_ref::<ClientError>() {
        return store_error_to_exit_code(&client_error.source);
    }
    if let Some(store_error) = err.downcast_ref::<StoreError>() {
        return store_error_to_exit_code(store_error);
    }
    if err.downcast_ref::<tokio::time::error::Elapsed>().is_some() {
        return EX_TEMPFAIL;
    }
    EX_FAILURE
}
