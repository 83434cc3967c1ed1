//! Link creation and replacement between the link pool and the version pool.
//!
//! Switching the active version is a two-step protocol: remove the occupied
//! destination (only under `force`), then create a directory link. The steps
//! are not atomic; a crash in between leaves the destination absent, and a
//! repeated call repairs it. Each destination path is independent, so a
//! failure for one group never affects another.
//!
//! On Windows, unprivileged processes are usually denied symlink creation
//! (error 1314 unless Developer Mode is on). The fallback is a directory
//! junction, which needs no elevation and redirects traversal all the same.

use crate::config::PoolLayout;
use crate::error::{PivotError, Result};
use std::fs;
use std::io;
use std::path::Path;

/// The platform mechanism that materializes a directory link. Split out as a
/// trait so the remove/create protocol can be exercised with a fake.
pub trait DirLink {
    fn create(&self, src: &Path, dst: &Path) -> io::Result<()>;
}

/// Primary mechanism: a real directory symlink.
pub struct Symlinker;

impl DirLink for Symlinker {
    #[cfg(unix)]
    fn create(&self, src: &Path, dst: &Path) -> io::Result<()> {
        std::os::unix::fs::symlink(src, dst)
    }

    #[cfg(windows)]
    fn create(&self, src: &Path, dst: &Path) -> io::Result<()> {
        // Directory-link semantics are mandatory on Windows; a file symlink
        // at dst would not redirect traversal
        std::os::windows::fs::symlink_dir(src, dst)
    }
}

/// Fallback mechanism: an NTFS directory junction via `mklink /J`. Junctions
/// are reparse points that require no privilege to create.
#[cfg(windows)]
pub struct Junctioner;

#[cfg(windows)]
impl DirLink for Junctioner {
    fn create(&self, src: &Path, dst: &Path) -> io::Result<()> {
        let output = std::process::Command::new("cmd")
            .args(["/C", "mklink", "/J"])
            .arg(dst)
            .arg(src)
            .output()?;

        if output.status.success() {
            Ok(())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            Err(io::Error::other(format!(
                "mklink /J failed: {}",
                stderr.trim()
            )))
        }
    }
}

/// What this platform actually uses: symlinks, with the junction fallback on
/// Windows when the symlink privilege is not held. The probe is the creation
/// attempt itself - there is no cheaper way to ask the OS.
struct PlatformLink;

impl DirLink for PlatformLink {
    #[cfg(windows)]
    fn create(&self, src: &Path, dst: &Path) -> io::Result<()> {
        const ERROR_PRIVILEGE_NOT_HELD: i32 = 1314;

        match Symlinker.create(src, dst) {
            Ok(()) => Ok(()),
            Err(e) if e.raw_os_error() == Some(ERROR_PRIVILEGE_NOT_HELD) => {
                tracing::debug!("symlink privilege not held, falling back to junction");
                Junctioner.create(src, dst)
            }
            Err(e) => Err(e),
        }
    }

    #[cfg(not(windows))]
    fn create(&self, src: &Path, dst: &Path) -> io::Result<()> {
        Symlinker.create(src, dst)
    }
}

/// Create (or with `force`, replace) the link `Persists/<group_name>`
/// pointing at `Versions/<folder_name>`.
///
/// Without `force`, an occupied destination fails with
/// [`PivotError::AlreadyExists`] and nothing on disk changes. With `force`,
/// whatever occupies the destination is removed first - a link, a stray
/// file, or a real directory. Creation failures other than the privilege
/// denial handled by the junction fallback propagate verbatim.
pub fn create_link(
    pools: &PoolLayout,
    group_name: &str,
    folder_name: &str,
    force: bool,
) -> Result<()> {
    create_link_with(&PlatformLink, pools, group_name, folder_name, force)
}

fn create_link_with(
    link: &dyn DirLink,
    pools: &PoolLayout,
    group_name: &str,
    folder_name: &str,
    force: bool,
) -> Result<()> {
    let src = pools.versions_dir.join(folder_name);
    let dst = pools.persists_dir.join(group_name);

    if fs::symlink_metadata(&dst).is_ok() {
        if !force {
            return Err(PivotError::AlreadyExists(dst));
        }
        remove_entry(&dst)?;
    }

    tracing::debug!("linking {} -> {}", dst.display(), src.display());
    link.create(&src, &dst).map_err(PivotError::Io)
}

/// Remove whatever occupies a destination path: symlinks and files via
/// unlink, directories via the non-recursive removal first (which succeeds
/// for a junction, an empty reparse point) and full recursive removal only
/// when that fails because the destination was a real populated directory.
fn remove_entry(dst: &Path) -> Result<()> {
    let file_type = fs::symlink_metadata(dst)?.file_type();

    if file_type.is_symlink() || file_type.is_file() {
        // A directory symlink on Windows must be removed as a directory
        if fs::remove_file(dst).is_err() {
            fs::remove_dir(dst)?;
        }
        return Ok(());
    }

    if fs::remove_dir(dst).is_err() {
        fs::remove_dir_all(dst)?;
    }
    Ok(())
}
