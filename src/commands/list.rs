use anyhow::Result;
use colored::Colorize;

use crate::config::PoolLayout;
use crate::groups;

/// Show every app group with its versions and active link
pub fn list(pools: &PoolLayout, json: bool) -> Result<()> {
    let groups = groups::compute_groups(pools);

    if json {
        println!("{}", serde_json::to_string_pretty(&groups)?);
        return Ok(());
    }

    if groups.is_empty() {
        println!("{} No versions or links found", "∅".dimmed());
        println!(
            "Version pool: {}",
            pools.versions_dir.display().to_string().dimmed()
        );
        return Ok(());
    }

    for (name, group) in &groups {
        if group.versions.is_empty() {
            // Link-only entry not sourced from the version pool
            println!("{} {}", name.bold(), "(unmanaged)".yellow());
            continue;
        }

        println!("{}", name.bold());
        for version in &group.versions {
            if group.active_version.as_deref() == Some(version) {
                let via = group.link_name.as_deref().unwrap_or(name);
                println!("  {} {} {}", "●".green(), version, format!("← {via}").dimmed());
            } else {
                println!("  {} {}", "○".dimmed(), version);
            }
        }
    }

    Ok(())
}

/// Show version folders whose identity has no entry in the link pool
pub fn unlinked(pools: &PoolLayout) -> Result<()> {
    let unlinked = groups::unlinked_versions(pools);

    if unlinked.is_empty() {
        println!("{} All versions are linked", "✓".green());
        return Ok(());
    }

    for (identity, folder) in unlinked {
        println!("{} {}", identity.bold(), folder.dimmed());
    }

    Ok(())
}
