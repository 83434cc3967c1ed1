//! Pool layout detection - where the version pool and link pool live

use std::path::{Path, PathBuf};

/// Directory name of the version pool under the app root
const VERSIONS_DIR: &str = "Versions";

/// Directory name of the link pool under the app root
const PERSISTS_DIR: &str = "Persists";

/// The two filesystem pools the engine operates on.
///
/// `versions_dir` holds one subdirectory per installed version of any app.
/// `persists_dir` holds the directory links designating active versions.
#[derive(Debug, Clone)]
pub struct PoolLayout {
    pub versions_dir: PathBuf,
    pub persists_dir: PathBuf,
}

impl PoolLayout {
    /// Layout rooted at an explicit app directory
    pub fn new(root: &Path) -> Self {
        Self {
            versions_dir: root.join(VERSIONS_DIR),
            persists_dir: root.join(PERSISTS_DIR),
        }
    }

    /// Detect the app root on this system.
    ///
    /// `PIVOT_ROOT` overrides everything. Otherwise the root is the directory
    /// containing the running executable - pivot is a portable app and lives
    /// next to the pools it manages. Falls back to the current directory when
    /// the executable path is unavailable.
    pub fn detect() -> Self {
        if let Ok(root) = std::env::var("PIVOT_ROOT") {
            return Self::new(Path::new(&root));
        }

        let root = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
            .unwrap_or_else(|| PathBuf::from("."));

        Self::new(&root)
    }
}
