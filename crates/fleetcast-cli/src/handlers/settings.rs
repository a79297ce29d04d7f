//! Settings command handler.

use anyhow::Result;

use fleetcast_core::Settings;

/// Execute the settings command.
///
/// Reads and prints the scalar runtime settings. The relay password and the
/// signing secret are masked; this output is safe to paste into an issue.
pub fn execute() -> Result<()> {
    let settings = Settings::from_env()?;
    println!("{settings}");
    Ok(())
}
