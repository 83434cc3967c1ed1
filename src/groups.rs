//! Grouping engine - reconciling version folders with link-pool entries.
//!
//! The central subtlety is naming: a link's name can differ arbitrarily from
//! the identity inferred from any version folder (a user may have linked
//! `FooApp-1.2` under plain `Foo`). Group identity therefore depends on link
//! observations, which forces two explicit passes: scan every link first,
//! then assign versions. Both passes run over fresh snapshots of the pools on
//! every call; nothing is cached.

use crate::config::PoolLayout;
use crate::normalize::app_name;
use crate::resolve::{pool_child, resolve_target};
use crate::scan;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap, HashSet};

/// One logical application as surfaced to callers.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AppGroup {
    /// Version folder names belonging to this app, in sorted scan order.
    /// Empty for unmanaged link-only groups.
    pub versions: Vec<String>,
    /// The folder the current link resolves to, if any. Always a member of
    /// `versions` when set.
    pub active_version: Option<String>,
    /// The link-pool entry backing `active_version`, or for unmanaged groups
    /// the entry's own name.
    pub link_name: Option<String>,
}

/// Compute the full app-group map from the current pool contents.
///
/// Total: scan and resolution failures degrade to empty or unresolved, never
/// to an error. Returns a sorted map so callers can render it directly.
pub fn compute_groups(pools: &PoolLayout) -> BTreeMap<String, AppGroup> {
    let links = scan::link_entries(pools);

    // Pass 1: resolve every link. A link whose target is a descendant of the
    // version pool is "managed"; its own name takes naming priority over the
    // inferred identity for every version sharing that identity, including
    // versions that were never linked.
    let mut version_to_link: HashMap<String, String> = HashMap::new();
    let mut priority_name: HashMap<String, String> = HashMap::new();
    let mut managed: HashSet<String> = HashSet::new();

    for link in &links {
        let Some(target) = resolve_target(&pools.persists_dir.join(link)) else {
            continue;
        };
        let Some(folder) = pool_child(&target, &pools.versions_dir) else {
            tracing::debug!("{} points outside the version pool", link);
            continue;
        };
        priority_name.insert(app_name(&folder), link.clone());
        version_to_link.insert(folder, link.clone());
        managed.insert(link.clone());
    }

    // Pass 2: assign every version folder to its group, preferring an
    // observed link name over the inferred identity.
    let mut groups: BTreeMap<String, AppGroup> = BTreeMap::new();

    for folder in scan::version_folders(pools) {
        let identity = app_name(&folder);
        let group_name = priority_name
            .get(&identity)
            .cloned()
            .unwrap_or(identity);

        let group = groups.entry(group_name).or_default();
        if let Some(link) = version_to_link.get(&folder) {
            group.active_version = Some(folder.clone());
            group.link_name = Some(link.clone());
        }
        group.versions.push(folder);
    }

    // Pass 3: links that do not point into the version pool still surface,
    // as version-less groups. A manually placed install next to the managed
    // ones must be visible but never merged into a managed group.
    for link in links {
        if managed.contains(&link) {
            continue;
        }
        let group = groups.entry(link.clone()).or_default();
        if group.link_name.is_none() {
            group.link_name = Some(link);
        }
    }

    groups
}

/// Legacy single-version view: `(identity, folder)` for every version folder
/// whose inferred identity has no entry of any kind in the link pool. Kept
/// for callers that predate grouping and only want "what is not linked yet".
pub fn unlinked_versions(pools: &PoolLayout) -> Vec<(String, String)> {
    let persisted: HashSet<String> = scan::link_entries(pools).into_iter().collect();

    scan::version_folders(pools)
        .into_iter()
        .filter_map(|folder| {
            let identity = app_name(&folder);
            (!persisted.contains(&identity)).then_some((identity, folder))
        })
        .collect()
}
