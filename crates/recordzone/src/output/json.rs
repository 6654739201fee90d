//! JSON output formatting.

/// Format a value as single-line JSON.
pub fn format_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use recordzone_core::customer::Customer;

    use super::*;

    #[test]
    fn test_customer_json() {
        let customer = Customer::with_guid("abc").with_customer_name("Apple");

        assert_eq!(
            format_json(&customer),
            r#"{"guid":"abc","customer_name":"Apple","contact_name":null,"contact_email":null}"#
        );
    }

    #[test]
    fn test_empty_list_json() {
        let customers: Vec<Customer> = Vec::new();
        assert_eq!(format_json(&customers), "[]");
    }
}
