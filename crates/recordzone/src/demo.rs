//! Sample customer walkthrough.
//!
//! Saves two customers, renames one, deletes the other, and returns the
//! listings observed along the way. Used by `recordzone demo`.

use serde::Serialize;

use recordzone_core::customer::{sort_by_name, Customer};
use recordzone_core::storage::{RecordStore, SettingsStore};

use crate::client::RecordStoreClient;
use crate::error::Result;

/// Listings taken at each step of the walkthrough.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DemoReport {
    /// Both sample customers, sorted by name.
    pub after_save: Vec<Customer>,
    /// The zone after the rename and the delete.
    pub after_update: Vec<Customer>,
}

/// Run the walkthrough. With `cleanup`, the surviving sample customer is deleted at the end.
pub async fn run<S: RecordStore, K: SettingsStore>(
    client: &RecordStoreClient<S, K>,
    cleanup: bool,
) -> Result<DemoReport> {
    let mut apple = Customer::new()
        .with_customer_name("Apple")
        .with_contact_name("Tim Cook")
        .with_contact_email("tim@apple.com");
    let google = Customer::new()
        .with_customer_name("Google")
        .with_contact_name("Sundar Pichai")
        .with_contact_email("sundar@google.com");

    client.save(&apple).await?;
    client.save(&google).await?;

    let mut after_save = only_samples(client.list().await?, &[&apple, &google]);
    sort_by_name(&mut after_save);

    apple.customer_name = Some("iApple".to_string());
    client.save(&apple).await?;
    client.delete(&google).await?;

    let after_update = only_samples(client.list().await?, &[&apple, &google]);

    if cleanup {
        client.delete(&apple).await?;
    }

    Ok(DemoReport {
        after_save,
        after_update,
    })
}

/// Keep only the customers this run created; the zone may hold others.
fn only_samples(customers: Vec<Customer>, samples: &[&Customer]) -> Vec<Customer> {
    customers
        .into_iter()
        .filter(|c| samples.iter().any(|s| s.guid == c.guid))
        .collect()
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::storage::inmemory::{InMemoryRecordStore, InMemorySettingsStore};

    fn client() -> RecordStoreClient<InMemoryRecordStore, InMemorySettingsStore> {
        RecordStoreClient::new(
            Arc::new(InMemoryRecordStore::new()),
            Arc::new(InMemorySettingsStore::new()),
        )
    }

    fn names(customers: &[Customer]) -> Vec<&str> {
        customers
            .iter()
            .filter_map(|c| c.customer_name.as_deref())
            .collect()
    }

    #[tokio::test]
    async fn test_walkthrough() {
        let client = client();

        let report = run(&client, false).await.unwrap();

        assert_eq!(names(&report.after_save), vec!["Apple", "Google"]);
        assert_eq!(names(&report.after_update), vec!["iApple"]);
        let survivor = &report.after_update[0];
        assert_eq!(survivor.contact_name.as_deref(), Some("Tim Cook"));
        assert_eq!(survivor.contact_email.as_deref(), Some("tim@apple.com"));
        assert_eq!(client.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_walkthrough_ignores_existing_customers() {
        let client = client();
        let existing = Customer::new().with_customer_name("Acme");
        client.save(&existing).await.unwrap();

        let report = run(&client, true).await.unwrap();

        assert_eq!(names(&report.after_save), vec!["Apple", "Google"]);
        assert_eq!(client.list().await.unwrap(), vec![existing]);
    }
}
