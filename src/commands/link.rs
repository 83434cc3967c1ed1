use anyhow::Result;
use colored::Colorize;

use crate::config::PoolLayout;
use crate::error::PivotError;
use crate::normalize::app_name;
use crate::{groups, link as linker};

/// Link one version folder as the active version of its app.
///
/// The group name defaults to the inferred identity unless the caller picks
/// one. A failure is reported but returns `Ok` so batch callers looping over
/// folders keep going; only the requested group is affected.
pub fn link(pools: &PoolLayout, folder: &str, name: Option<&str>, force: bool) -> Result<()> {
    if !pools.versions_dir.join(folder).is_dir() {
        println!(
            "{} {} not found in {}",
            "✗".red(),
            folder.bold(),
            pools.versions_dir.display()
        );
        return Ok(());
    }

    let group_name = match name {
        Some(name) => name.to_string(),
        None => app_name(folder),
    };

    match linker::create_link(pools, &group_name, folder, force) {
        Ok(()) => {
            println!(
                "{} Linked {} {} {}",
                "✓".green(),
                group_name.cyan(),
                "→".dimmed(),
                folder.dimmed()
            );
            // Recompute so the caller sees the state the engine now sees
            let groups = groups::compute_groups(pools);
            if let Some(group) = groups.get(&group_name) {
                if group.active_version.as_deref() != Some(folder) {
                    println!(
                        "  {} link created but {} is not the active version",
                        "⚠".yellow(),
                        folder
                    );
                }
            }
        }
        Err(PivotError::AlreadyExists(dst)) => {
            println!(
                "{} {} already exists (use {} to replace it)",
                "⚠".yellow(),
                dst.display(),
                "--force".bold()
            );
        }
        Err(e) => {
            // A hard OS failure must surface in the exit code so scripted
            // callers can see it; conflicts above stay recoverable hints
            println!("{} Failed to link {}: {}", "✗".red(), group_name.bold(), e);
            return Err(e.into());
        }
    }

    Ok(())
}
