mod conversions;
mod keys;
mod sorting;
mod types;

pub use conversions::{customer_to_record, record_to_customer};
pub use keys::{
    customer_record_id, customer_zone, CONTACT_EMAIL_FIELD, CONTACT_NAME_FIELD,
    CUSTOMER_NAME_FIELD, CUSTOMER_RECORD_TYPE, CUSTOMER_ZONE_NAME, ZONE_CREATED_SETTING_KEY,
};
pub use sorting::{compare_by_name, sort_by_name};
pub use types::Customer;
