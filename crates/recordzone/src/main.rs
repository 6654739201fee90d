use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use recordzone::cli::customers::CustomersAction;
use recordzone::cli::zone::ZoneAction;
use recordzone::cli::{Cli, Commands};
use recordzone::output;
use recordzone::{demo, error, Config, RecordStoreClient};
use recordzone_core::customer::{sort_by_name, Customer};
use recordzone_core::storage::{RecordStore, SettingsStore};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logs go to stderr so stdout only carries command output.
    let default_filter = if cli.quiet {
        "recordzone=warn"
    } else {
        "recordzone=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env();

    match run(cli, config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "Command failed");
            eprintln!("Error: {err:#}");
            ExitCode::from(error::exit_code(&err))
        }
    }
}

async fn run(cli: Cli, config: Config) -> Result<()> {
    let client = build_client(&config).await?;

    tokio::time::timeout(config.operation_timeout(), execute(&cli, &client))
        .await
        .with_context(|| {
            format!(
                "Operation timed out after {}s",
                config.operation_timeout_seconds
            )
        })?
}

#[cfg(feature = "inmemory")]
async fn build_client(
    config: &Config,
) -> Result<
    RecordStoreClient<
        recordzone::storage::inmemory::InMemoryRecordStore,
        recordzone::storage::inmemory::InMemorySettingsStore,
    >,
> {
    use recordzone::storage::inmemory::{InMemoryRecordStore, InMemorySettingsStore};

    tracing::debug!("Using in-memory record store");
    let store = InMemoryRecordStore::new().with_page_size(config.page_size);
    Ok(RecordStoreClient::new(
        Arc::new(store),
        Arc::new(InMemorySettingsStore::new()),
    ))
}

#[cfg(feature = "dynamodb")]
async fn build_client(
    config: &Config,
) -> Result<
    RecordStoreClient<
        recordzone::storage::dynamodb::DynamoDbRecordStore,
        recordzone::storage::sqlite::SqliteSettingsStore,
    >,
> {
    use recordzone::storage::dynamodb::DynamoDbRecordStore;
    use recordzone::storage::sqlite::SqliteSettingsStore;

    let settings = SqliteSettingsStore::new(&config.settings_path)
        .await
        .with_context(|| format!("Failed to open settings database {}", config.settings_path))?;
    let store = DynamoDbRecordStore::from_config(config).await;

    tracing::info!(
        target_backend = %config.target_display(),
        table = %store.table_name(),
        "Using DynamoDB record store"
    );
    Ok(RecordStoreClient::new(Arc::new(store), Arc::new(settings)))
}

async fn execute<S: RecordStore, K: SettingsStore>(
    cli: &Cli,
    client: &RecordStoreClient<S, K>,
) -> Result<()> {
    match &cli.command {
        Commands::Zone(zone_cmd) => match zone_cmd.action {
            ZoneAction::Ensure => {
                client.ensure_zone_exists().await?;
                if !cli.quiet {
                    println!("Zone {} is ready", client.zone());
                }
            }
        },
        Commands::Customers(customers_cmd) => match &customers_cmd.action {
            CustomersAction::List { sort_by_name: sort } => {
                let mut customers = client.list().await?;
                if *sort {
                    sort_by_name(&mut customers);
                }
                println!("{}", output::format_customers(&customers, cli.format));
            }
            CustomersAction::Save {
                guid,
                name,
                contact,
                email,
            } => {
                let customer = Customer {
                    guid: guid.clone().unwrap_or_else(|| Customer::new().guid),
                    customer_name: name.clone(),
                    contact_name: contact.clone(),
                    contact_email: email.clone(),
                };
                client.save(&customer).await?;
                println!("{}", output::format_saved_customer(&customer, cli.format));
            }
            CustomersAction::Delete { guid } => {
                client.delete(&Customer::with_guid(guid.as_str())).await?;
                if !cli.quiet {
                    println!("Deleted customer {}", guid);
                }
            }
        },
        Commands::Demo { cleanup } => {
            let report = demo::run(client, *cleanup).await?;
            println!("{}", output::format_demo_report(&report, cli.format));
        }
    }

    Ok(())
}
