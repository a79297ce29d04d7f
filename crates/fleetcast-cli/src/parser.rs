//! Main CLI parser and top-level argument handling.

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface definition for the fleetcast diagnostics tool.
///
/// This is the top-level parser that handles global options and dispatches
/// to subcommands.
#[derive(Parser)]
#[command(name = "fleetcast")]
#[command(about = "Inspect fleetcast path resolution and runtime settings")]
#[command(version)]
pub struct Cli {
    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_args() {
        let cli = Cli::parse_from(["fleetcast", "--verbose", "paths"]);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Paths { json: false }));
    }

    #[test]
    fn test_paths_json_flag() {
        let cli = Cli::parse_from(["fleetcast", "paths", "--json"]);
        assert!(matches!(cli.command, Commands::Paths { json: true }));
    }
}
