//! Paths command handler.
//!
//! Displays all resolved paths with their resolution sources. This is the
//! "golden truth" tool for debugging layout issues on the hosting platform.

use anyhow::Result;

use fleetcast_core::ResolvedPaths;

/// Execute the paths command.
///
/// Resolves and prints every path in `key = value (source)` form, or as
/// pretty-printed JSON when `json` is set.
pub fn execute(json: bool) -> Result<()> {
    let paths = ResolvedPaths::resolve()?;
    if json {
        println!("{}", serde_json::to_string_pretty(&paths)?);
    } else {
        println!("{paths}");
    }
    Ok(())
}
