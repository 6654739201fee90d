//! Conversion between `Customer` and the backend's untyped record.
//!
//! Pure functions, testable without any backend.

use crate::storage::{FieldValue, RawRecord, StoreError};

use super::keys::{
    customer_record_id, CONTACT_EMAIL_FIELD, CONTACT_NAME_FIELD, CUSTOMER_NAME_FIELD,
    CUSTOMER_RECORD_TYPE, CUSTOMER_ZONE_NAME,
};
use super::Customer;

/// Convert a Customer to a raw record.
///
/// Every declared field is written. Absent values are sent as cleared fields,
/// so saving a customer overwrites all three descriptive fields.
pub fn customer_to_record(customer: &Customer) -> RawRecord {
    let mut record = RawRecord::new(customer_record_id(&customer.guid), CUSTOMER_RECORD_TYPE);

    record.set_field(
        CUSTOMER_NAME_FIELD,
        customer.customer_name.clone().map(FieldValue::Text),
    );
    record.set_field(
        CONTACT_NAME_FIELD,
        customer.contact_name.clone().map(FieldValue::Text),
    );
    record.set_field(
        CONTACT_EMAIL_FIELD,
        customer.contact_email.clone().map(FieldValue::Text),
    );

    record
}

/// Convert a raw record to a Customer.
///
/// Missing fields, and fields holding something other than text, decode to `None`.
pub fn record_to_customer(record: &RawRecord) -> Result<Customer, StoreError> {
    if record.record_type != CUSTOMER_RECORD_TYPE {
        return Err(StoreError::InvalidData(format!(
            "Expected record type {}, got {}",
            CUSTOMER_RECORD_TYPE, record.record_type
        )));
    }
    if record.id.zone.name() != CUSTOMER_ZONE_NAME {
        return Err(StoreError::InvalidData(format!(
            "Customer record {} outside of zone {}",
            record.id, CUSTOMER_ZONE_NAME
        )));
    }

    Ok(Customer {
        guid: record.id.name.clone(),
        customer_name: get_optional_text(record, CUSTOMER_NAME_FIELD),
        contact_name: get_optional_text(record, CONTACT_NAME_FIELD),
        contact_email: get_optional_text(record, CONTACT_EMAIL_FIELD),
    })
}

fn get_optional_text(record: &RawRecord, key: &str) -> Option<String> {
    record.text(key).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::customer::customer_zone;
    use crate::storage::RecordId;

    fn sample_customer() -> Customer {
        Customer::with_guid("550E8400-E29B-41D4-A716-446655440001")
            .with_customer_name("Apple")
            .with_contact_name("Tim Cook")
            .with_contact_email("tim@apple.com")
    }

    #[test]
    fn test_customer_round_trip() {
        let customer = sample_customer();
        let record = customer_to_record(&customer);
        let parsed = record_to_customer(&record).unwrap();

        assert_eq!(customer, parsed);
    }

    #[test]
    fn test_record_has_key_and_type() {
        let record = customer_to_record(&sample_customer());

        assert_eq!(
            record.id.to_string(),
            "customerRecordZone/550E8400-E29B-41D4-A716-446655440001"
        );
        assert_eq!(record.record_type, "Customer");
        assert_eq!(record.text("customerName"), Some("Apple"));
        assert_eq!(record.text("contactName"), Some("Tim Cook"));
        assert_eq!(record.text("contactEmail"), Some("tim@apple.com"));
    }

    #[test]
    fn test_absent_fields_are_sent_as_cleared() {
        let record = customer_to_record(&Customer::with_guid("abc"));

        assert_eq!(record.fields.len(), 3);
        assert!(record.fields.values().all(Option::is_none));
    }

    #[test]
    fn test_missing_fields_decode_to_none() {
        let record = RawRecord::new(customer_record_id("abc"), "Customer")
            .with_field("customerName", "Apple");

        let customer = record_to_customer(&record).unwrap();

        assert_eq!(customer.guid, "abc");
        assert_eq!(customer.customer_name.as_deref(), Some("Apple"));
        assert_eq!(customer.contact_name, None);
        assert_eq!(customer.contact_email, None);
    }

    #[test]
    fn test_non_text_field_decodes_to_none() {
        let record =
            RawRecord::new(customer_record_id("abc"), "Customer").with_field("contactName", 7);

        let customer = record_to_customer(&record).unwrap();

        assert_eq!(customer.contact_name, None);
    }

    #[test]
    fn test_empty_string_is_preserved() {
        let customer = Customer::with_guid("abc").with_customer_name("");
        let parsed = record_to_customer(&customer_to_record(&customer)).unwrap();

        assert_eq!(parsed.customer_name.as_deref(), Some(""));
    }

    #[test]
    fn test_wrong_record_type_is_invalid() {
        let record = RawRecord::new(customer_record_id("abc"), "Invoice");
        assert!(matches!(
            record_to_customer(&record),
            Err(StoreError::InvalidData(_))
        ));
    }

    #[test]
    fn test_wrong_zone_is_invalid() {
        let record = RawRecord::new(
            RecordId::new(crate::storage::ZoneId::new("otherZone"), "abc"),
            "Customer",
        );
        assert_ne!(record.id.zone, customer_zone());
        assert!(matches!(
            record_to_customer(&record),
            Err(StoreError::InvalidData(_))
        ));
    }
}
