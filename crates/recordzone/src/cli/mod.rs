//! CLI command definitions.

pub mod customers;
pub mod zone;

use clap::{Parser, Subcommand, ValueEnum};

/// Manage customer records in a zoned record store.
#[derive(Debug, Parser)]
#[command(name = "recordzone")]
#[command(about = "Manage customer records in a zoned record store", long_about = None)]
pub struct Cli {
    /// Output format.
    #[arg(long, env = "RECORDZONE_FORMAT", default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long, env = "RECORDZONE_QUIET")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Record zone management.
    Zone(zone::ZoneCommand),
    /// Customer management.
    Customers(customers::CustomersCommand),
    /// Run the sample customer walkthrough against the configured backend.
    Demo {
        /// Delete the remaining sample customer afterwards.
        #[arg(long)]
        cleanup: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use customers::CustomersAction;

    #[test]
    fn test_parse_customers_save() {
        let cli = Cli::try_parse_from([
            "recordzone",
            "--format",
            "json",
            "customers",
            "save",
            "--name",
            "Apple",
            "--email",
            "tim@apple.com",
        ])
        .unwrap();

        assert!(matches!(cli.format, OutputFormat::Json));
        match cli.command {
            Commands::Customers(cmd) => match cmd.action {
                CustomersAction::Save {
                    guid,
                    name,
                    contact,
                    email,
                } => {
                    assert_eq!(guid, None);
                    assert_eq!(name.as_deref(), Some("Apple"));
                    assert_eq!(contact, None);
                    assert_eq!(email.as_deref(), Some("tim@apple.com"));
                }
                other => panic!("unexpected action: {other:?}"),
            },
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_customers_delete_requires_guid() {
        assert!(Cli::try_parse_from(["recordzone", "customers", "delete"]).is_err());
    }

    #[test]
    fn test_parse_list_sorted() {
        let cli =
            Cli::try_parse_from(["recordzone", "--quiet", "customers", "list", "--sort-by-name"])
                .unwrap();

        assert!(cli.quiet);
        assert!(matches!(
            cli.command,
            Commands::Customers(customers::CustomersCommand {
                action: CustomersAction::List { sort_by_name: true }
            })
        ));
    }

    #[test]
    fn test_parse_zone_ensure() {
        let cli = Cli::try_parse_from(["recordzone", "zone", "ensure"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Zone(zone::ZoneCommand {
                action: zone::ZoneAction::Ensure
            })
        ));
    }
}
