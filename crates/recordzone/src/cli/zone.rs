//! Zone CLI commands.

use clap::{Parser, Subcommand};

/// Record zone commands.
#[derive(Debug, Parser)]
pub struct ZoneCommand {
    #[command(subcommand)]
    pub action: ZoneAction,
}

/// Available zone actions.
#[derive(Debug, Subcommand)]
pub enum ZoneAction {
    /// Create the customer zone unless this installation already did.
    Ensure,
}
