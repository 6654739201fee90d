use async_trait::async_trait;

use super::{
    Cursor, DeleteOutcome, QueryPage, RawRecord, RecordId, Result, SaveOutcome, SavePolicy, ZoneId,
};

/// A remote, paged record store partitioned into zones.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Creates a zone. A zone that already exists is not an error.
    async fn create_zone(&self, zone: &ZoneId) -> Result<()>;

    /// Fetches one page of all records of `record_type` in `zone`.
    ///
    /// Pass the cursor from the previous page to continue; `None` starts
    /// from the beginning.
    async fn query(
        &self,
        zone: &ZoneId,
        record_type: &str,
        cursor: Option<&Cursor>,
    ) -> Result<QueryPage>;

    /// Inserts or updates a record by its primary key.
    async fn upsert(&self, record: &RawRecord, policy: SavePolicy) -> Result<SaveOutcome>;

    /// Deletes a record by its primary key.
    async fn delete(&self, id: &RecordId) -> Result<DeleteOutcome>;
}

/// Durable local key-value settings.
#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Reads a boolean flag. A key that was never written reads as `false`.
    async fn get_flag(&self, key: &str) -> Result<bool>;

    /// Writes a boolean flag.
    async fn set_flag(&self, key: &str, value: bool) -> Result<()>;
}
