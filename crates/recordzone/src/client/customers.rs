//! Customer operations.

use recordzone_core::customer::{
    customer_to_record, record_to_customer, Customer, CUSTOMER_RECORD_TYPE,
};
use recordzone_core::storage::{Cursor, RecordStore, SavePolicy, SettingsStore};

use super::{contract_violation, RecordStoreClient};
use crate::error::{ClientError, Operation, Result};

impl<S: RecordStore, K: SettingsStore> RecordStoreClient<S, K> {
    /// List every customer in the zone, in backend order.
    ///
    /// Pages are fetched one after another until the backend stops returning a
    /// cursor. A failure on any page discards what was gathered so far.
    pub async fn list(&self) -> Result<Vec<Customer>> {
        let tag = ClientError::tag(Operation::List);
        self.bootstrap_zone().await.map_err(&tag)?;

        let mut customers = Vec::new();
        let mut cursor: Option<Cursor> = None;
        let mut page = 0usize;

        loop {
            page += 1;
            let result = self
                .store
                .query(&self.zone, CUSTOMER_RECORD_TYPE, cursor.as_ref())
                .await
                .map_err(&tag)?;

            tracing::debug!(
                zone = %self.zone,
                page,
                count = result.records.len(),
                "Fetched customer page"
            );

            for record in &result.records {
                customers.push(record_to_customer(record).map_err(&tag)?);
            }

            match result.next_cursor {
                Some(next) => cursor = Some(next),
                None => break,
            }
        }

        tracing::info!(
            zone = %self.zone,
            pages = page,
            count = customers.len(),
            "Listed customers"
        );
        Ok(customers)
    }

    /// Insert or update a customer, keyed by its guid.
    ///
    /// All three descriptive fields are written; an absent one clears the stored value.
    ///
    /// # Panics
    ///
    /// Panics if the backend reports success with a saved count other than one.
    pub async fn save(&self, customer: &Customer) -> Result<()> {
        let tag = ClientError::tag(Operation::Save);
        self.bootstrap_zone().await.map_err(&tag)?;

        let record = customer_to_record(customer);
        let outcome = self
            .store
            .upsert(&record, SavePolicy::ChangedKeys)
            .await
            .map_err(&tag)?;

        if outcome.saved_count != 1 {
            contract_violation(Operation::Save, outcome.saved_count);
        }

        tracing::info!(zone = %self.zone, guid = %customer.guid, "Customer saved");
        Ok(())
    }

    /// Delete a customer by its guid. A missing record surfaces the backend's not-found error.
    ///
    /// # Panics
    ///
    /// Panics if the backend reports success with a deleted count other than one.
    pub async fn delete(&self, customer: &Customer) -> Result<()> {
        let tag = ClientError::tag(Operation::Delete);
        self.bootstrap_zone().await.map_err(&tag)?;

        let outcome = self
            .store
            .delete(&customer.record_id())
            .await
            .map_err(&tag)?;

        if outcome.deleted_count != 1 {
            contract_violation(Operation::Delete, outcome.deleted_count);
        }

        tracing::info!(zone = %self.zone, guid = %customer.guid, "Customer deleted");
        Ok(())
    }
}
