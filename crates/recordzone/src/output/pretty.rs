//! Pretty output formatting.

use recordzone_core::customer::Customer;

use crate::demo::DemoReport;

const UNSET: &str = "-";

/// Format a customer for display.
pub fn format_customer(customer: &Customer) -> String {
    format!(
        "{}\n  GUID: {}\n  Contact: {}\n  Email: {}",
        customer.customer_name.as_deref().unwrap_or("(unnamed)"),
        customer.guid,
        customer.contact_name.as_deref().unwrap_or(UNSET),
        customer.contact_email.as_deref().unwrap_or(UNSET),
    )
}

/// Format customers for display.
pub fn format_customers(customers: &[Customer]) -> String {
    if customers.is_empty() {
        return "No customers found.".to_string();
    }
    let mut output = format!("CUSTOMERS ({})\n", customers.len());
    output.push_str(&"-".repeat(40));
    for customer in customers {
        output.push_str(&format!("\n{}", format_customer(customer)));
        output.push('\n');
    }
    output
}

/// Format the demo listings for display.
pub fn format_demo_report(report: &DemoReport) -> String {
    format!(
        "After saving:\n{}\nAfter rename and delete:\n{}",
        format_customers(&report.after_save),
        format_customers(&report.after_update)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_customer() {
        let customer = Customer::with_guid("abc")
            .with_customer_name("Apple")
            .with_contact_name("Tim Cook")
            .with_contact_email("tim@apple.com");

        assert_eq!(
            format_customer(&customer),
            "Apple\n  GUID: abc\n  Contact: Tim Cook\n  Email: tim@apple.com"
        );
    }

    #[test]
    fn test_format_customer_without_fields() {
        assert_eq!(
            format_customer(&Customer::with_guid("abc")),
            "(unnamed)\n  GUID: abc\n  Contact: -\n  Email: -"
        );
    }

    #[test]
    fn test_format_customers_empty() {
        assert_eq!(format_customers(&[]), "No customers found.");
    }

    #[test]
    fn test_format_customers_header() {
        let customers = vec![
            Customer::with_guid("a").with_customer_name("Apple"),
            Customer::with_guid("g").with_customer_name("Google"),
        ];

        let output = format_customers(&customers);

        assert!(output.starts_with("CUSTOMERS (2)\n"));
        assert!(output.contains("Apple\n  GUID: a"));
        assert!(output.contains("Google\n  GUID: g"));
    }

    #[test]
    fn test_format_demo_report() {
        let report = DemoReport {
            after_save: vec![Customer::with_guid("a").with_customer_name("Apple")],
            after_update: Vec::new(),
        };

        let output = format_demo_report(&report);

        assert!(output.starts_with("After saving:\nCUSTOMERS (1)"));
        assert!(output.ends_with("After rename and delete:\nNo customers found."));
    }
}
