//! Customer CLI commands.

use clap::{Parser, Subcommand};

/// Customer management commands.
#[derive(Debug, Parser)]
pub struct CustomersCommand {
    #[command(subcommand)]
    pub action: CustomersAction,
}

/// Available customer actions.
#[derive(Debug, Subcommand)]
pub enum CustomersAction {
    /// List all customers.
    List {
        /// Sort by customer name instead of backend order.
        #[arg(long)]
        sort_by_name: bool,
    },
    /// Create or update a customer. Omitted fields are cleared.
    Save {
        /// Customer GUID (a new one is minted when omitted).
        #[arg(long)]
        guid: Option<String>,
        /// Customer name.
        #[arg(long)]
        name: Option<String>,
        /// Contact name.
        #[arg(long)]
        contact: Option<String>,
        /// Contact email.
        #[arg(long)]
        email: Option<String>,
    },
    /// Delete a customer by GUID.
    Delete {
        /// Customer GUID.
        guid: String,
    },
}
