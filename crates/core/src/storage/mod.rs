mod error;
pub mod exit_codes;
mod traits;
mod types;

pub use error::{Result, StoreError};
pub use exit_codes::store_error_to_exit_code;
pub use traits::{RecordStore, SettingsStore};
pub use types::{
    Cursor, DeleteOutcome, FieldValue, QueryPage, RawRecord, RecordId, SaveOutcome, SavePolicy,
    ZoneId,
};
