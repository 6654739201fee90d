//! Fixed names that address customer records.
//!
//! Pure functions and constants; nothing here talks to a backend.

use crate::storage::{RecordId, ZoneId};

/// Zone holding every customer record.
pub const CUSTOMER_ZONE_NAME: &str = "customerRecordZone";

/// Backend record type for customers.
pub const CUSTOMER_RECORD_TYPE: &str = "Customer";

/// Settings key of the "zone has been created" flag.
pub const ZONE_CREATED_SETTING_KEY: &str = "customerRecordZoneCreatedKey";

pub const CUSTOMER_NAME_FIELD: &str = "customerName";
pub const CONTACT_NAME_FIELD: &str = "contactName";
pub const CONTACT_EMAIL_FIELD: &str = "contactEmail";

/// The zone customer records live in.
pub fn customer_zone() -> ZoneId {
    ZoneId::new(CUSTOMER_ZONE_NAME)
}

/// Primary key of the customer with the given guid.
///
/// Pattern: `customerRecordZone/<guid>`
pub fn customer_record_id(guid: &str) -> RecordId {
    RecordId::new(customer_zone(), guid)
}
