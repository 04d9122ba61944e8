//! Persistence through the on-disk state file

use navshell_core::{
    ExpansionStore, FileStore, GroupId, NavTree, NoopStyleFlag, ShellConfig, SidebarShell,
};
use tempfile::TempDir;

#[test]
fn test_expanded_round_trip_through_file() {
    let dir = TempDir::new().unwrap();
    let config = ShellConfig::default();

    let mut shell = SidebarShell::new(
        NavTree::dashboard(),
        FileStore::new(dir.path()),
        NoopStyleFlag,
        config.clone(),
        "/",
    );
    shell.set_expanded(true);
    drop(shell);

    let raw = std::fs::read_to_string(FileStore::new(dir.path()).path()).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json["sidebar-expanded"], "true");

    let store = ExpansionStore::open(FileStore::new(dir.path()), NoopStyleFlag, &config);
    assert!(store.is_expanded());
}

#[test]
fn test_open_groups_round_trip_when_enabled() {
    let dir = TempDir::new().unwrap();
    let config = ShellConfig {
        persist_open_groups: true,
        ..ShellConfig::default()
    };
    let settings = GroupId::from("settings");

    let mut shell = SidebarShell::new(
        NavTree::dashboard(),
        FileStore::new(dir.path()),
        NoopStyleFlag,
        config.clone(),
        "/inbox",
    );
    shell.set_expanded(true);
    shell.click_group_header(&settings).unwrap();
    drop(shell);

    let shell = SidebarShell::new(
        NavTree::dashboard(),
        FileStore::new(dir.path()),
        NoopStyleFlag,
        config,
        "/inbox",
    );
    assert!(shell.is_group_open(&settings));
    assert!(!shell.is_group_active(&settings));
}

#[test]
fn test_mounting_on_a_route_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let config = ShellConfig {
        persist_open_groups: true,
        ..ShellConfig::default()
    };

    let mut shell = SidebarShell::new(
        NavTree::dashboard(),
        FileStore::new(dir.path()),
        NoopStyleFlag,
        config,
        "/ecommerce/customers",
    );
    shell.navigate("/job/company-profile");
    let view = shell.view();
    drop(shell);

    assert_eq!(view.path, "/job/company-profile");
    assert!(!FileStore::new(dir.path()).path().exists());
}

#[test]
fn test_unreadable_state_dir_degrades() {
    let dir = TempDir::new().unwrap();
    // A directory where the state file should be makes every read fail
    let store_dir = dir.path().join("blocked");
    std::fs::create_dir_all(store_dir.join(navshell_core::storage::STATE_FILE_NAME)).unwrap();

    let config = ShellConfig::default();
    let mut store = ExpansionStore::open(FileStore::new(&store_dir), NoopStyleFlag, &config);
    assert!(!store.is_expanded());

    store.set_expanded(true);
    assert!(store.is_expanded());
    assert!(store.last_write_failed());
}
