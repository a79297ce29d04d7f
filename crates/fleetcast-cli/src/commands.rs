//! Main commands enum.
//!
//! This module defines the available commands for the diagnostics tool.

use clap::Subcommand;

/// Available commands for the fleetcast configuration diagnostics tool.
#[derive(Subcommand)]
pub enum Commands {
    /// Show resolved artifact and data paths with their sources
    Paths {
        /// Emit machine-readable JSON instead of key = value lines
        #[arg(long)]
        json: bool,
    },

    /// Show resolved runtime settings (secrets masked)
    Settings,

    /// Verify that every resolved artifact exists on disk
    Check,
}
