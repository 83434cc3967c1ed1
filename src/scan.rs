//! Pool scanning - reading the raw contents of the two pools.
//!
//! Scans are best-effort and never fail: a missing or unreadable pool yields
//! an empty list, and the data is read fresh on every call (no caching, no
//! watching).

use crate::config::PoolLayout;
use std::fs;
use std::path::Path;

/// List the version pool: directory names only, lexicographically sorted.
pub fn version_folders(pools: &PoolLayout) -> Vec<String> {
    let mut folders: Vec<String> = read_names(&pools.versions_dir, true);
    folders.sort();
    folders
}

/// List the link pool: every entry regardless of type, order unspecified.
///
/// Entries here may be symlinks, junctions, plain directories, or stray
/// files; classifying them is the resolver's job, not the scanner's.
pub fn link_entries(pools: &PoolLayout) -> Vec<String> {
    read_names(&pools.persists_dir, false)
}

fn read_names(pool: &Path, dirs_only: bool) -> Vec<String> {
    let entries = match fs::read_dir(pool) {
        Ok(entries) => entries,
        Err(e) => {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!("cannot read pool {}: {}", pool.display(), e);
            }
            return Vec::new();
        }
    };

    entries
        .filter_map(|entry| entry.ok())
        .filter(|entry| !dirs_only || entry.path().is_dir())
        .map(|entry| entry.file_name().to_string_lossy().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_missing_pools_yield_empty() {
        let pools = PoolLayout::new(&PathBuf::from("/nonexistent/pivot-root"));
        assert!(version_folders(&pools).is_empty());
        assert!(link_entries(&pools).is_empty());
    }

    #[test]
    fn test_version_folders_sorted_dirs_only() {
        let temp = tempfile::tempdir().unwrap();
        let pools = PoolLayout::new(temp.path());
        fs::create_dir_all(pools.versions_dir.join("zeta-1.0")).unwrap();
        fs::create_dir_all(pools.versions_dir.join("alpha-2.0")).unwrap();
        fs::write(pools.versions_dir.join("stray.txt"), "not a version").unwrap();

        assert_eq!(version_folders(&pools), vec!["alpha-2.0", "zeta-1.0"]);
    }

    #[test]
    fn test_link_entries_include_files_and_dirs() {
        let temp = tempfile::tempdir().unwrap();
        let pools = PoolLayout::new(temp.path());
        fs::create_dir_all(pools.persists_dir.join("SomeApp")).unwrap();
        fs::write(pools.persists_dir.join("notes.txt"), "x").unwrap();

        let mut entries = link_entries(&pools);
        entries.sort();
        assert_eq!(entries, vec!["SomeApp", "notes.txt"]);
    }
}
