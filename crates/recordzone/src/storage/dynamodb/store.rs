//! DynamoDB record store implementation.
//!
//! Implements `RecordStore` from `recordzone_core::storage` on a single table
//! with `PK`/`SK` string keys.

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;

use recordzone_core::storage::{
    Cursor, DeleteOutcome, QueryPage, RawRecord, RecordId, RecordStore, Result, SaveOutcome,
    SavePolicy, ZoneId,
};

use super::conversions::{
    decode_cursor, encode_cursor, item_to_record, record_key, record_to_item, update_plan,
    zone_marker_item, ATTR_RECORD_TYPE,
};
use super::error::{
    map_delete_item_error, map_put_item_error, map_query_error, map_update_item_error,
};
use super::keys;
use crate::config::Config;

/// DynamoDB-based record store.
pub struct DynamoDbRecordStore {
    client: Client,
    table_name: String,
    page_size: i32,
}

impl DynamoDbRecordStore {
    /// Creates a new store with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
            page_size: 100,
        }
    }

    /// Sets the `Limit` sent with each query page.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = i32::try_from(page_size.max(1)).unwrap_or(i32::MAX);
        self
    }

    /// Creates a store from application configuration.
    ///
    /// Uses the AWS SDK default credential chain with the configured region,
    /// and the custom endpoint when one is set.
    pub async fn from_config(config: &Config) -> Self {
        let mut sdk_config_loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(config.region.clone()));

        if let Some(endpoint) = &config.endpoint_url {
            sdk_config_loader = sdk_config_loader.endpoint_url(endpoint);
        }

        let sdk_config = sdk_config_loader.load().await;
        Self::new(Client::new(&sdk_config), &config.table_name).with_page_size(config.page_size)
    }

    /// Get the table name.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

#[async_trait]
impl RecordStore for DynamoDbRecordStore {
    async fn create_zone(&self, zone: &ZoneId) -> Result<()> {
        // Unconditional put: writing the marker twice is harmless.
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(zone_marker_item(zone)))
            .send()
            .await
            .map_err(map_put_item_error)?;

        tracing::debug!(zone = %zone, table = %self.table_name, "Zone marker written");
        Ok(())
    }

    async fn query(
        &self,
        zone: &ZoneId,
        record_type: &str,
        cursor: Option<&Cursor>,
    ) -> Result<QueryPage> {
        let start_key = cursor.map(decode_cursor).transpose()?;

        let output = self
            .client
            .query()
            .table_name(&self.table_name)
            .key_condition_expression("PK = :pk AND begins_with(SK, :prefix)")
            .filter_expression("#rt = :rt")
            .expression_attribute_names("#rt", ATTR_RECORD_TYPE)
            .expression_attribute_values(":pk", AttributeValue::S(keys::zone_pk(zone)))
            .expression_attribute_values(
                ":prefix",
                AttributeValue::S(keys::RECORD_PREFIX.to_string()),
            )
            .expression_attribute_values(":rt", AttributeValue::S(record_type.to_string()))
            .limit(self.page_size)
            .set_exclusive_start_key(start_key)
            .send()
            .await
            .map_err(map_query_error)?;

        let items = output.items.unwrap_or_default();
        let records = items
            .iter()
            .map(|item| item_to_record(zone, item))
            .collect::<Result<Vec<_>>>()?;

        let next_cursor = match &output.last_evaluated_key {
            Some(key) => encode_cursor(key)?,
            None => None,
        };

        Ok(QueryPage::new(records, next_cursor))
    }

    async fn upsert(&self, record: &RawRecord, policy: SavePolicy) -> Result<SaveOutcome> {
        match policy {
            SavePolicy::ChangedKeys => {
                let plan = update_plan(record)?;

                self.client
                    .update_item()
                    .table_name(&self.table_name)
                    .set_key(Some(record_key(&record.id)))
                    .update_expression(plan.update_expression)
                    .set_expression_attribute_names(Some(plan.names))
                    .set_expression_attribute_values(Some(plan.values))
                    .send()
                    .await
                    .map_err(map_update_item_error)?;
            }
            SavePolicy::AllKeys => {
                self.client
                    .put_item()
                    .table_name(&self.table_name)
                    .set_item(Some(record_to_item(record)?))
                    .send()
                    .await
                    .map_err(map_put_item_error)?;
            }
        }

        Ok(SaveOutcome { saved_count: 1 })
    }

    async fn delete(&self, id: &RecordId) -> Result<DeleteOutcome> {
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .set_key(Some(record_key(id)))
            .condition_expression("attribute_exists(PK)")
            .send()
            .await
            .map_err(|e| map_delete_item_error(e, "Record", id.to_string()))?;

        Ok(DeleteOutcome { deleted_count: 1 })
    }
}
