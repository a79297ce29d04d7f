//! Command handlers.
//!
//! Thin wrappers that resolve configuration via `fleetcast-core` and format
//! the result for the terminal. No resolution logic lives here.

pub mod check;
pub mod paths;
pub mod settings;
