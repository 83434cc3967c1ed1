//! Link target resolution for entries in the link pool.
//!
//! An entry in Persists/ can be a true symlink, a Windows directory junction,
//! a plain directory, or a stray file. Junctions are the awkward case: they
//! do not report as symlinks through `symlink_metadata`, but `read_link`
//! still returns their redirect target, so classification goes through the
//! read-target call unconditionally.

use std::fs;
use std::path::{Component, Path, PathBuf};

/// Lexically normalize a path: drop `.` components and fold `..` into the
/// preceding component. Pure path algebra - nothing is touched on disk, so
/// this works for broken links too (unlike `canonicalize`).
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut parts: Vec<Component> = Vec::new();
    for comp in path.components() {
        match comp {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => parts.push(comp),
            },
            other => parts.push(other),
        }
    }
    parts.iter().collect()
}

/// Resolve what a link-pool entry points at, if anything.
///
/// Returns the absolute target path for symlinks and junctions, `None` for
/// plain directories and files. A relative target is resolved against the
/// entry's parent directory. Broken links still return their recorded target;
/// existence is deliberately not re-checked here. OS-level failures
/// (permissions, I/O) are swallowed and reported as `None` - this is a
/// best-effort classification, not a hard dependency.
pub fn resolve_target(entry: &Path) -> Option<PathBuf> {
    let target = match fs::read_link(entry) {
        Ok(target) => target,
        Err(e) => {
            tracing::debug!("{} has no readable link target: {}", entry.display(), e);
            return None;
        }
    };

    let absolute = if target.is_relative() {
        normalize_path(&entry.parent()?.join(&target))
    } else {
        target
    };

    Some(dunce::simplified(&absolute).to_path_buf())
}

/// Test whether `target` lies inside `pool`, and if so return the name of the
/// top-level pool child it falls under.
///
/// Windows APIs hand back extended-length paths (`\\?\C:\...`) while
/// configured pool roots usually lack the prefix, so both sides are
/// simplified before the prefix test. The test itself is exact path algebra;
/// no case folding beyond what the filesystem already did.
pub fn pool_child(target: &Path, pool: &Path) -> Option<String> {
    let target = dunce::simplified(target);
    let pool = dunce::simplified(pool);

    let rel = target.strip_prefix(pool).ok()?;
    rel.components()
        .next()
        .map(|c| c.as_os_str().to_string_lossy().to_string())
}
