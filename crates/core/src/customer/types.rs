use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::storage::RecordId;

use super::keys::customer_record_id;

/// A customer and its primary contact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Primary key within the customer zone. Never changes once minted.
    pub guid: String,
    pub customer_name: Option<String>,
    pub contact_name: Option<String>,
    pub contact_email: Option<String>,
}

impl Customer {
    /// Creates a customer with a freshly minted guid and no fields set.
    pub fn new() -> Self {
        Self::with_guid(Uuid::new_v4().to_string())
    }

    /// Creates a customer with the given guid and no fields set.
    pub fn with_guid(guid: impl Into<String>) -> Self {
        Self {
            guid: guid.into(),
            customer_name: None,
            contact_name: None,
            contact_email: None,
        }
    }

    pub fn with_customer_name(mut self, name: impl Into<String>) -> Self {
        self.customer_name = Some(name.into());
        self
    }

    pub fn with_contact_name(mut self, name: impl Into<String>) -> Self {
        self.contact_name = Some(name.into());
        self
    }

    pub fn with_contact_email(mut self, email: impl Into<String>) -> Self {
        self.contact_email = Some(email.into());
        self
    }

    /// The backend key of this customer's record.
    pub fn record_id(&self) -> RecordId {
        customer_record_id(&self.guid)
    }
}

impl Default for Customer {
    fn default() -> Self {
        Self::new()
    }
}
