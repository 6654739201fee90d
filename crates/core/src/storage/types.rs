use std::collections::BTreeMap;
use std::fmt;

/// A named partition of the remote store that isolates one application's records.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ZoneId(String);

impl ZoneId {
    /// Creates a zone identifier from its name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the zone name.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Primary key of a record: the zone it lives in plus its record name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId {
    pub zone: ZoneId,
    pub name: String,
}

impl RecordId {
    /// Creates a record identifier within the given zone.
    pub fn new(zone: ZoneId, name: impl Into<String>) -> Self {
        Self {
            zone,
            name: name.into(),
        }
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.zone, self.name)
    }
}

/// An untyped field value as stored by the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Number(i64),
}

impl FieldValue {
    /// Returns the string value, or `None` if this is not a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            FieldValue::Number(_) => None,
        }
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Number(value)
    }
}

/// A record as the backend sees it: a key, a type name and an untyped field map.
///
/// In an outgoing record, a field mapped to `None` asks the backend to clear
/// that field. Records returned from a query only carry `Some` values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    pub id: RecordId,
    pub record_type: String,
    pub fields: BTreeMap<String, Option<FieldValue>>,
}

impl RawRecord {
    /// Creates a record with no fields.
    pub fn new(id: RecordId, record_type: impl Into<String>) -> Self {
        Self {
            id,
            record_type: record_type.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Sets a field, replacing any previous value. `None` marks the field as cleared.
    pub fn set_field(&mut self, name: impl Into<String>, value: Option<FieldValue>) {
        self.fields.insert(name.into(), value);
    }

    /// Builder form of [`RawRecord::set_field`] for a present value.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.set_field(name, Some(value.into()));
        self
    }

    /// Returns the value of a field if it is present and holds a value.
    pub fn field(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name).and_then(Option::as_ref)
    }

    /// Returns the value of a field if it is present and holds text.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.field(name).and_then(FieldValue::as_text)
    }
}

/// Opaque continuation token returned by a paged query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cursor(String);

impl Cursor {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One page of query results.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryPage {
    pub records: Vec<RawRecord>,
    /// Present when more results remain.
    pub next_cursor: Option<Cursor>,
}

impl QueryPage {
    pub fn new(records: Vec<RawRecord>, next_cursor: Option<Cursor>) -> Self {
        Self {
            records,
            next_cursor,
        }
    }

    /// Returns true when the backend reported no further pages.
    pub fn is_last(&self) -> bool {
        self.next_cursor.is_none()
    }
}

/// How an upsert merges with an existing record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SavePolicy {
    /// Write only the fields present in the outgoing record; leave the rest untouched.
    ChangedKeys,
    /// Replace the stored record with the outgoing one.
    AllKeys,
}

/// What the backend reported after an upsert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaveOutcome {
    pub saved_count: usize,
}

/// What the backend reported after a delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteOutcome {
    pub deleted_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zone() -> ZoneId {
        ZoneId::new("customerRecordZone")
    }

    #[test]
    fn test_record_id_display() {
        let id = RecordId::new(zone(), "abc-123");
        assert_eq!(id.to_string(), "customerRecordZone/abc-123");
    }

    #[test]
    fn test_field_value_as_text() {
        assert_eq!(FieldValue::from("Apple").as_text(), Some("Apple"));
        assert_eq!(FieldValue::from(42).as_text(), None);
    }

    #[test]
    fn test_cleared_field_reads_as_absent() {
        let mut record = RawRecord::new(RecordId::new(zone(), "abc"), "Customer");
        record.set_field("customerName", None);

        assert!(record.fields.contains_key("customerName"));
        assert_eq!(record.field("customerName"), None);
        assert_eq!(record.text("customerName"), None);
    }

    #[test]
    fn test_text_ignores_numbers() {
        let record = RawRecord::new(RecordId::new(zone(), "abc"), "Customer")
            .with_field("customerName", "Apple")
            .with_field("employees", 164_000);

        assert_eq!(record.text("customerName"), Some("Apple"));
        assert_eq!(record.text("employees"), None);
        assert_eq!(record.field("employees"), Some(&FieldValue::Number(164_000)));
    }

    #[test]
    fn test_query_page_is_last() {
        assert!(QueryPage::new(Vec::new(), None).is_last());
        assert!(!QueryPage::new(Vec::new(), Some(Cursor::new("next"))).is_last());
    }
}
