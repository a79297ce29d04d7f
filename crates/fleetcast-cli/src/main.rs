//! CLI entry point - the composition root.
//!
//! Loads `.env`, installs the tracing subscriber, and dispatches commands.
//! Resolution happens inside the handlers so each command sees the same
//! environment a server process would.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use fleetcast_cli::{Cli, Commands, handlers};

fn main() -> anyhow::Result<()> {
    // Deployment environments keep SMTP credentials and path overrides in
    // a `.env` file next to the service.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Paths { json } => handlers::paths::execute(json),
        Commands::Settings => handlers::settings::execute(),
        Commands::Check => handlers::check::execute(),
    }
}
