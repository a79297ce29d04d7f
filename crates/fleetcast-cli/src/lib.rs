//! CLI library: parser, commands, and handlers for the `fleetcast` binary.
#![deny(unused_crate_dependencies)]

// Dependencies used only by the binary entry point
use dotenvy as _;
use tracing_subscriber as _;

pub mod commands;
pub mod handlers;
pub mod parser;

// Re-export primary types for convenient access
pub use commands::Commands;
pub use parser::Cli;
