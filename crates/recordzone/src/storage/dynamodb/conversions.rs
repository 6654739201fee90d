//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and raw records,
//! for planning UpdateItem expressions and for encoding query cursors.
//! These are testable in isolation without DynamoDB access.

use std::collections::{BTreeMap, HashMap};

use aws_sdk_dynamodb::types::AttributeValue;
use recordzone_core::storage::{Cursor, FieldValue, RawRecord, RecordId, StoreError, ZoneId};

use super::keys;

pub const ATTR_PK: &str = "PK";
pub const ATTR_SK: &str = "SK";
pub const ATTR_ENTITY_TYPE: &str = "entityType";
pub const ATTR_RECORD_TYPE: &str = "recordType";

pub const ENTITY_TYPE_ZONE: &str = "ZONE";
pub const ENTITY_TYPE_RECORD: &str = "RECORD";

/// Attribute names a record field may not use.
const RESERVED_ATTRIBUTES: [&str; 4] = [ATTR_PK, ATTR_SK, ATTR_ENTITY_TYPE, ATTR_RECORD_TYPE];

pub type Item = HashMap<String, AttributeValue>;

// ============================================================================
// Zone marker
// ============================================================================

/// Convert a zone to its marker item.
pub fn zone_marker_item(zone: &ZoneId) -> Item {
    let mut item = HashMap::new();
    item.insert(ATTR_PK.to_string(), AttributeValue::S(keys::zone_pk(zone)));
    item.insert(
        ATTR_SK.to_string(),
        AttributeValue::S(keys::zone_marker_sk(zone)),
    );
    item.insert(
        ATTR_ENTITY_TYPE.to_string(),
        AttributeValue::S(ENTITY_TYPE_ZONE.to_string()),
    );
    item.insert("zoneName".to_string(), AttributeValue::S(zone.to_string()));
    item
}

// ============================================================================
// Records
// ============================================================================

/// Primary key attributes of a record item.
pub fn record_key(id: &RecordId) -> Item {
    let mut key = HashMap::new();
    key.insert(ATTR_PK.to_string(), AttributeValue::S(keys::zone_pk(&id.zone)));
    key.insert(ATTR_SK.to_string(), AttributeValue::S(keys::record_sk(&id.name)));
    key
}

/// Convert a raw record to a full DynamoDB item.
///
/// Cleared fields are left out, so a PutItem of the result drops them.
pub fn record_to_item(record: &RawRecord) -> Result<Item, StoreError> {
    let mut item = record_key(&record.id);
    item.insert(
        ATTR_ENTITY_TYPE.to_string(),
        AttributeValue::S(ENTITY_TYPE_RECORD.to_string()),
    );
    item.insert(
        ATTR_RECORD_TYPE.to_string(),
        AttributeValue::S(record.record_type.clone()),
    );

    for (name, value) in &record.fields {
        check_field_name(name)?;
        if let Some(value) = value {
            item.insert(name.clone(), field_to_attribute(value));
        }
    }

    Ok(item)
}

/// Convert a DynamoDB item from the given zone to a raw record.
///
/// Attributes that are neither strings nor integral numbers are skipped.
pub fn item_to_record(zone: &ZoneId, item: &Item) -> Result<RawRecord, StoreError> {
    let sk = get_string(item, ATTR_SK)?;
    let name = keys::record_name_from_sk(&sk)
        .ok_or_else(|| StoreError::InvalidData(format!("Not a record sort key: {sk}")))?;
    let record_type = get_string(item, ATTR_RECORD_TYPE)?;

    let mut record = RawRecord::new(RecordId::new(zone.clone(), name), record_type);
    for (attr, value) in item {
        if RESERVED_ATTRIBUTES.contains(&attr.as_str()) {
            continue;
        }
        if let Some(value) = attribute_to_field(value) {
            record.set_field(attr.clone(), Some(value));
        }
    }

    Ok(record)
}

fn field_to_attribute(value: &FieldValue) -> AttributeValue {
    match value {
        FieldValue::Text(s) => AttributeValue::S(s.clone()),
        FieldValue::Number(n) => AttributeValue::N(n.to_string()),
    }
}

fn attribute_to_field(value: &AttributeValue) -> Option<FieldValue> {
    match value {
        AttributeValue::S(s) => Some(FieldValue::Text(s.clone())),
        AttributeValue::N(n) => n.parse().ok().map(FieldValue::Number),
        _ => None,
    }
}

fn check_field_name(name: &str) -> Result<(), StoreError> {
    if RESERVED_ATTRIBUTES.contains(&name) {
        return Err(StoreError::InvalidData(format!(
            "Field name is reserved: {name}"
        )));
    }
    Ok(())
}

// ============================================================================
// UpdateItem planning
// ============================================================================

/// Expression and placeholders for a changed-keys UpdateItem.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdatePlan {
    pub update_expression: String,
    pub names: HashMap<String, String>,
    pub values: HashMap<String, AttributeValue>,
}

/// Plan an UpdateItem that writes only the fields the record carries.
///
/// Valued fields become `SET` actions and cleared fields become `REMOVE` actions.
/// Field names always go through `#fN` placeholders because DynamoDB reserves
/// many common words.
pub fn update_plan(record: &RawRecord) -> Result<UpdatePlan, StoreError> {
    let mut names = HashMap::new();
    let mut values = HashMap::new();

    names.insert("#et".to_string(), ATTR_ENTITY_TYPE.to_string());
    values.insert(
        ":et".to_string(),
        AttributeValue::S(ENTITY_TYPE_RECORD.to_string()),
    );
    names.insert("#rt".to_string(), ATTR_RECORD_TYPE.to_string());
    values.insert(
        ":rt".to_string(),
        AttributeValue::S(record.record_type.clone()),
    );

    let mut set_actions = vec!["#et = :et".to_string(), "#rt = :rt".to_string()];
    let mut remove_actions = Vec::new();

    for (index, (name, value)) in record.fields.iter().enumerate() {
        check_field_name(name)?;
        let name_placeholder = format!("#f{index}");
        names.insert(name_placeholder.clone(), name.clone());

        match value {
            Some(value) => {
                let value_placeholder = format!(":f{index}");
                set_actions.push(format!("{name_placeholder} = {value_placeholder}"));
                values.insert(value_placeholder, field_to_attribute(value));
            }
            None => remove_actions.push(name_placeholder),
        }
    }

    let mut update_expression = format!("SET {}", set_actions.join(", "));
    if !remove_actions.is_empty() {
        update_expression.push_str(&format!(" REMOVE {}", remove_actions.join(", ")));
    }

    Ok(UpdatePlan {
        update_expression,
        names,
        values,
    })
}

// ============================================================================
// Cursors
// ============================================================================

/// Encode a `LastEvaluatedKey` as an opaque cursor.
///
/// An empty key means the query is exhausted and yields no cursor.
pub fn encode_cursor(last_evaluated_key: &Item) -> Result<Option<Cursor>, StoreError> {
    if last_evaluated_key.is_empty() {
        return Ok(None);
    }

    let key: BTreeMap<&str, &str> = last_evaluated_key
        .iter()
        .map(|(name, value)| {
            value
                .as_s()
                .map(|s| (name.as_str(), s.as_str()))
                .map_err(|_| {
                    StoreError::Serialization(format!("Key attribute {name} is not a string"))
                })
        })
        .collect::<Result<_, _>>()?;

    let token = serde_json::to_string(&key).map_err(|e| StoreError::Serialization(e.to_string()))?;
    Ok(Some(Cursor::new(token)))
}

/// Decode a cursor produced by [`encode_cursor`] into an `ExclusiveStartKey`.
pub fn decode_cursor(cursor: &Cursor) -> Result<Item, StoreError> {
    let key: BTreeMap<String, String> = serde_json::from_str(cursor.as_str())
        .map_err(|e| StoreError::Serialization(format!("Malformed cursor: {e}")))?;

    Ok(key
        .into_iter()
        .map(|(name, value)| (name, AttributeValue::S(value)))
        .collect())
}

// ============================================================================
// Helper functions
// ============================================================================

fn get_string(item: &Item, key: &str) -> Result<String, StoreError> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
        .ok_or_else(|| StoreError::InvalidData(format!("Missing or invalid field: {}", key)))
}
