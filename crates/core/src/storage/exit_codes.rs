//! Pure functions for mapping store errors to process exit codes.
//!
//! Codes follow the BSD `sysexits.h` conventions so that scripts driving the
//! CLI can tell a missing record apart from an unreachable backend.

use super::StoreError;

pub const EX_DATAERR: u8 = 65;
pub const EX_NOINPUT: u8 = 66;
pub const EX_UNAVAILABLE: u8 = 69;
pub const EX_CANTCREAT: u8 = 73;
pub const EX_TEMPFAIL: u8 = 75;

/// Maps a [`StoreError`] to a process exit code.
///
/// - `NotFound` -> 66 (`EX_NOINPUT`)
/// - `AlreadyExists` -> 73 (`EX_CANTCREAT`)
/// - `ConnectionFailed` -> 69 (`EX_UNAVAILABLE`)
/// - `QueryFailed` -> 75 (`EX_TEMPFAIL`)
/// - `Serialization` -> 65 (`EX_DATAERR`)
/// - `InvalidData` -> 65 (`EX_DATAERR`)
///
/// # Examples
///
/// ```
/// use recordzone_core::storage::{store_error_to_exit_code, StoreError};
///
/// let error = StoreError::NotFound {
///     entity_type: "Customer",
///     id: "abc-123".to_string(),
/// };
/// assert_eq!(store_error_to_exit_code(&error), 66);
/// ```
pub fn store_error_to_exit_code(error: &StoreError) -> u8 {
    match error {
        StoreError::NotFound { .. } => EX_NOINPUT,
        StoreError::AlreadyExists { .. } => EX_CANTCREAT,
        StoreError::ConnectionFailed(_) => EX_UNAVAILABLE,
        StoreError::QueryFailed(_) => EX_TEMPFAIL,
        StoreError::Serialization(_) => EX_DATAERR,
        StoreError::InvalidData(_) => EX_DATAERR,
    }
}
