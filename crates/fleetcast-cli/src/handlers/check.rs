//! Check command handler.
//!
//! Re-stats every resolved artifact and reports which ones are actually
//! present. Resolution itself never fails for a missing file, so this is
//! the place a deployment learns what the model loader will later refuse.

use anyhow::Result;

use fleetcast_core::ResolvedPaths;

/// Execute the check command.
///
/// Exits with an error when any artifact is missing so deployment health
/// checks can script around it.
pub fn execute() -> Result<()> {
    let paths = ResolvedPaths::resolve()?;

    println!("{:<20} {:<8} PATH (SOURCE)", "ARTIFACT", "STATUS");
    println!("{}", "=".repeat(72));

    let mut missing = 0usize;
    for (label, resolved) in paths.artifacts.iter() {
        let status = if resolved.exists() {
            "found"
        } else {
            missing += 1;
            "missing"
        };
        println!(
            "{label:<20} {status:<8} {} ({})",
            resolved.path.display(),
            resolved.source
        );
    }

    println!();
    if missing > 0 {
        anyhow::bail!("{missing} artifact(s) missing");
    }
    println!("All artifacts present.");
    Ok(())
}
