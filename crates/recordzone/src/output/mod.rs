//! Output formatting functions.
//!
//! Each function renders one command result in the requested format: JSON goes
//! through [`json`], human-readable text through [`pretty`].

pub mod json;
pub mod pretty;

use recordzone_core::customer::Customer;

use crate::cli::OutputFormat;
use crate::demo::DemoReport;

/// Format a customer listing.
pub fn format_customers(customers: &[Customer], format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => json::format_json(&customers),
        OutputFormat::Pretty => pretty::format_customers(customers),
    }
}

/// Format a customer that was just saved.
pub fn format_saved_customer(customer: &Customer, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => json::format_json(customer),
        OutputFormat::Pretty => format!("Saved:\n{}", pretty::format_customer(customer)),
    }
}

/// Format the listings gathered by `recordzone demo`.
pub fn format_demo_report(report: &DemoReport, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => json::format_json(report),
        OutputFormat::Pretty => pretty::format_demo_report(report),
    }
}
