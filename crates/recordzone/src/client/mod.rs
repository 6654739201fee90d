//! Customer client over a zoned record store.
//!
//! `RecordStoreClient` provisions the customer zone on first use and then
//! exposes list, save and delete. Every operation round-trips to the store;
//! nothing is cached apart from the durable "zone created" flag.

pub mod customers;

use std::sync::Arc;

use tokio::sync::Mutex;

use recordzone_core::customer::{customer_zone, ZONE_CREATED_SETTING_KEY};
use recordzone_core::storage::{RecordStore, SettingsStore, StoreError, ZoneId};

use crate::error::{ClientError, Operation, Result};

/// Client for customer records in a remote record store.
pub struct RecordStoreClient<S, K> {
    store: Arc<S>,
    settings: Arc<K>,
    zone: ZoneId,
    /// Serializes the check / create / set sequence of the zone bootstrap.
    zone_guard: Mutex<()>,
}

impl<S: RecordStore, K: SettingsStore> RecordStoreClient<S, K> {
    /// Create a client over a record store and a local settings store.
    pub fn new(store: Arc<S>, settings: Arc<K>) -> Self {
        Self {
            store,
            settings,
            zone: customer_zone(),
            zone_guard: Mutex::new(()),
        }
    }

    /// The zone all customer records live in.
    pub fn zone(&self) -> &ZoneId {
        &self.zone
    }

    /// Make sure the customer zone exists, creating it at most once per installation.
    ///
    /// Once creation has succeeded the settings flag short-circuits every later
    /// call, across restarts too. A failed creation leaves the flag unset, so the
    /// next call tries again.
    pub async fn ensure_zone_exists(&self) -> Result<()> {
        self.bootstrap_zone()
            .await
            .map_err(ClientError::tag(Operation::EnsureZone))
    }

    async fn bootstrap_zone(&self) -> std::result::Result<(), StoreError> {
        let _guard = self.zone_guard.lock().await;

        if self.settings.get_flag(ZONE_CREATED_SETTING_KEY).await? {
            return Ok(());
        }

        tracing::info!(zone = %self.zone, "Creating record zone");
        if let Err(e) = self.store.create_zone(&self.zone).await {
            tracing::warn!(zone = %self.zone, error = %e, "Record zone creation failed");
            return Err(e);
        }

        self.settings.set_flag(ZONE_CREATED_SETTING_KEY, true).await?;
        tracing::info!(zone = %self.zone, "Record zone ready");
        Ok(())
    }
}

/// Abort on a backend that reported success with the wrong number of records.
fn contract_violation(operation: Operation, count: usize) -> ! {
    panic!("contract violation: {operation} reported {count} records, expected exactly 1")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::inmemory::{Fault, InMemoryRecordStore, InMemorySettingsStore, StoreCall};
    use crate::storage::sqlite::SqliteSettingsStore;

    fn client(
        store: &InMemoryRecordStore,
        settings: &InMemorySettingsStore,
    ) -> RecordStoreClient<InMemoryRecordStore, InMemorySettingsStore> {
        RecordStoreClient::new(Arc::new(store.clone()), Arc::new(settings.clone()))
    }

    #[tokio::test]
    async fn test_ensure_zone_creates_once() {
        let store = InMemoryRecordStore::new();
        let settings = InMemorySettingsStore::new();
        let client = client(&store, &settings);

        for _ in 0..5 {
            client.ensure_zone_exists().await.unwrap();
        }

        assert_eq!(store.call_count(StoreCall::CreateZone).await, 1);
        assert!(settings.get_flag(ZONE_CREATED_SETTING_KEY).await.unwrap());
    }

    #[tokio::test]
    async fn test_flag_already_set_skips_creation() {
        let store = InMemoryRecordStore::new();
        let settings = InMemorySettingsStore::new();
        settings
            .set_flag(ZONE_CREATED_SETTING_KEY, true)
            .await
            .unwrap();
        let client = client(&store, &settings);

        client.ensure_zone_exists().await.unwrap();

        assert_eq!(store.call_count(StoreCall::CreateZone).await, 0);
    }

    #[tokio::test]
    async fn test_failed_creation_leaves_flag_unset_and_retries() {
        let store = InMemoryRecordStore::new();
        let settings = InMemorySettingsStore::new();
        let error = StoreError::ConnectionFailed("network down".to_string());
        store
            .script(StoreCall::CreateZone, [Fault::Fail(error.clone())])
            .await;
        let client = client(&store, &settings);

        let result = client.ensure_zone_exists().await;

        assert_eq!(result, Err(ClientError::new(Operation::EnsureZone, error)));
        assert!(!settings.get_flag(ZONE_CREATED_SETTING_KEY).await.unwrap());

        client.ensure_zone_exists().await.unwrap();

        assert_eq!(store.call_count(StoreCall::CreateZone).await, 2);
        assert!(settings.get_flag(ZONE_CREATED_SETTING_KEY).await.unwrap());
    }

    #[tokio::test]
    async fn test_concurrent_callers_create_once() {
        let store = InMemoryRecordStore::new();
        let settings = InMemorySettingsStore::new();
        let client = Arc::new(client(&store, &settings));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let client = Arc::clone(&client);
                tokio::spawn(async move { client.ensure_zone_exists().await })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        assert_eq!(store.call_count(StoreCall::CreateZone).await, 1);
    }

    #[tokio::test]
    async fn test_flag_is_shared_across_clients() {
        let store = InMemoryRecordStore::new();
        let settings = InMemorySettingsStore::new();

        client(&store, &settings).ensure_zone_exists().await.unwrap();
        client(&store, &settings).ensure_zone_exists().await.unwrap();

        assert_eq!(store.call_count(StoreCall::CreateZone).await, 1);
    }

    #[tokio::test]
    async fn test_zone_created_once_across_restarts() {
        let store = InMemoryRecordStore::new();
        let path = std::env::temp_dir().join(format!(
            "recordzone-client-{}.db",
            uuid::Uuid::new_v4()
        ));

        {
            let settings = SqliteSettingsStore::new(&path).await.unwrap();
            let client = RecordStoreClient::new(Arc::new(store.clone()), Arc::new(settings));
            client.ensure_zone_exists().await.unwrap();
        }

        let reopened = SqliteSettingsStore::new(&path).await.unwrap();
        let client = RecordStoreClient::new(Arc::new(store.clone()), Arc::new(reopened));
        client.ensure_zone_exists().await.unwrap();
        client.list().await.unwrap();

        assert_eq!(store.call_count(StoreCall::CreateZone).await, 1);

        drop(client);
        let _ = std::fs::remove_file(&path);
    }

    #[tokio::test]
    async fn test_zone_is_customer_zone() {
        let client = client(&InMemoryRecordStore::new(), &InMemorySettingsStore::new());
        assert_eq!(client.zone().name(), "customerRecordZone");
    }
}
