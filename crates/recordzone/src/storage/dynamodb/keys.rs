//! DynamoDB key generation functions.
//!
//! Pure functions for generating partition and sort keys following the single-table design.
//! Every item of a zone shares the zone's partition key; the zone marker and the records
//! are told apart by their sort key prefix.

use recordzone_core::storage::ZoneId;

pub const ZONE_PREFIX: &str = "ZONE#";
pub const RECORD_PREFIX: &str = "REC#";

/// Generate the partition key shared by a zone's marker and records.
///
/// Pattern: `ZONE#<zone>`
pub fn zone_pk(zone: &ZoneId) -> String {
    format!("{ZONE_PREFIX}{zone}")
}

/// Generate the sort key of the zone marker item.
///
/// Pattern: `ZONE#<zone>` (same as PK)
pub fn zone_marker_sk(zone: &ZoneId) -> String {
    format!("{ZONE_PREFIX}{zone}")
}

/// Generate the sort key of a record.
///
/// Pattern: `REC#<record_name>`
pub fn record_sk(record_name: &str) -> String {
    format!("{RECORD_PREFIX}{record_name}")
}

/// Recover the record name from a record sort key.
pub fn record_name_from_sk(sk: &str) -> Option<&str> {
    sk.strip_prefix(RECORD_PREFIX)
}
