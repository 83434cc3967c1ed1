//! End-to-end grouping tests: links made by the link manager must be
//! reconciled correctly by the grouping engine.

#![cfg(unix)]


use pivot::{compute_groups, create_link, unlinked_versions};
use std::fs;
use std::os::unix::fs as unix_fs;
use test_helpers::TestEnvironment;

#[test]
fn test_linked_version_becomes_active() {
    let env = TestEnvironment::new();
    env.add_version("Bandizip-7.38");
    env.add_version("Bandizip-7.40");

    create_link(&env.pools, "Bandizip", "Bandizip-7.40", false).unwrap();

    let groups = compute_groups(&env.pools);
    let group = &groups["Bandizip"];
    assert_eq!(group.versions, vec!["Bandizip-7.38", "Bandizip-7.40"]);
    assert_eq!(group.active_version.as_deref(), Some("Bandizip-7.40"));
    assert_eq!(group.link_name.as_deref(), Some("Bandizip"));
}

#[test]
fn test_custom_link_name_claims_all_sibling_versions() {
    let env = TestEnvironment::new();
    env.add_version("FooApp-1.0");
    env.add_version("FooApp-2.0");
    env.add_version("Bandizip-7.40");

    // Linked under a caller-chosen name unrelated to the inferred identity
    create_link(&env.pools, "Foo", "FooApp-1.0", false).unwrap();

    let groups = compute_groups(&env.pools);
    assert!(!groups.contains_key("FooApp"));
    let group = &groups["Foo"];
    assert_eq!(group.versions, vec!["FooApp-1.0", "FooApp-2.0"]);
    assert_eq!(group.active_version.as_deref(), Some("FooApp-1.0"));
    // Unrelated apps are untouched
    assert_eq!(groups["Bandizip"].versions, vec!["Bandizip-7.40"]);
}

#[test]
fn test_switching_versions_moves_active() {
    let env = TestEnvironment::new();
    env.add_version("copyq-7.1.0");
    env.add_version("copyq-8.0.0");

    create_link(&env.pools, "copyq", "copyq-7.1.0", true).unwrap();
    create_link(&env.pools, "copyq", "copyq-8.0.0", true).unwrap();

    let groups = compute_groups(&env.pools);
    assert_eq!(groups["copyq"].active_version.as_deref(), Some("copyq-8.0.0"));
}

#[test]
fn test_external_link_outside_pool_is_unmanaged() {
    let env = TestEnvironment::new();
    env.add_version("Bandizip-7.40");

    let elsewhere = env.temp_dir.path().join("HandInstalled");
    fs::create_dir(&elsewhere).unwrap();
    unix_fs::symlink(&elsewhere, env.link_path("HandInstalled")).unwrap();

    let groups = compute_groups(&env.pools);
    let unmanaged = &groups["HandInstalled"];
    assert!(unmanaged.versions.is_empty());
    assert_eq!(unmanaged.active_version, None);
    assert_eq!(unmanaged.link_name.as_deref(), Some("HandInstalled"));
}

#[test]
fn test_link_to_file_outside_pool_contributes_no_version() {
    let env = TestEnvironment::new();
    env.add_version("Bandizip-7.40");

    let notes = env.temp_dir.path().join("notes.txt");
    fs::write(&notes, "x").unwrap();
    unix_fs::symlink(&notes, env.link_path("Notes")).unwrap();

    let groups = compute_groups(&env.pools);
    assert!(groups["Notes"].versions.is_empty());
    assert_eq!(groups["Bandizip"].active_version, None);
}

#[test]
fn test_active_version_always_member_of_versions() {
    let env = TestEnvironment::new();
    for folder in [
        "AIMP-5.40.2655",
        "AIMP-5.41.0",
        "copyq-7.1.0",
        "FastCopy5.8.1_x64",
    ] {
        env.add_version(folder);
    }
    create_link(&env.pools, "AIMP", "AIMP-5.41.0", false).unwrap();
    create_link(&env.pools, "FastCopy", "FastCopy5.8.1_x64", false).unwrap();

    for (name, group) in compute_groups(&env.pools) {
        if let Some(active) = &group.active_version {
            assert!(
                group.versions.contains(active),
                "group {name}: active {active} not in versions"
            );
        }
    }
}

#[test]
fn test_relative_symlink_grouped_like_absolute() {
    let env = TestEnvironment::new();
    env.add_version("Q-Dir-11.82");

    // External tooling may have created a relative link
    unix_fs::symlink("../Versions/Q-Dir-11.82", env.link_path("Q-Dir")).unwrap();

    let groups = compute_groups(&env.pools);
    let group = &groups["Q-Dir"];
    assert_eq!(group.active_version.as_deref(), Some("Q-Dir-11.82"));
}

#[test]
fn test_unlinked_then_linked_roundtrip() {
    let env = TestEnvironment::new();
    env.add_version("renamer-7.7");

    let before = unlinked_versions(&env.pools);
    assert_eq!(
        before,
        vec![("renamer".to_string(), "renamer-7.7".to_string())]
    );

    create_link(&env.pools, "renamer", "renamer-7.7", false).unwrap();
    assert!(unlinked_versions(&env.pools).is_empty());
}

#[test]
fn test_empty_pools_yield_empty_map() {
    let env = TestEnvironment::new();
    assert!(compute_groups(&env.pools).is_empty());
    assert!(unlinked_versions(&env.pools).is_empty());
}
