use std::path::{Path, PathBuf};

use metacheck_core::filter::is_ignored;
use metacheck_core::{AssetEntry, CheckConfig, CheckError, CollectedTree, EntryKind};

#[test]
fn test_entry_kind_serialization() {
    let entry = AssetEntry::file("Bundles/icon.png", false, true);
    let json = serde_json::to_string(&entry).unwrap();
    let back: AssetEntry = serde_json::from_str(&json).unwrap();

    assert_eq!(back, entry);
    assert!(matches!(
        back.kind,
        EntryKind::File {
            is_meta: false,
            is_bundle_candidate: true
        }
    ));
}

#[test]
fn test_tree_root_and_lookup() {
    let tree = CollectedTree::from_entries(
        "/project/Assets",
        vec![
            AssetEntry::file("a.txt", false, false),
            AssetEntry::file("a.txt.meta", true, false),
        ],
    );

    assert_eq!(tree.root(), &PathBuf::from("/project/Assets"));
    assert_eq!(
        tree.get("a.txt.meta").and_then(|e| e.asset_path()),
        Some("a.txt")
    );
    assert!(tree.get("b.txt").is_none());
}

#[test]
fn test_empty_tree() {
    let tree = CollectedTree::from_entries("/project/Assets", Vec::new());
    assert!(tree.is_empty());
    assert_eq!(tree.dir_count(), 0);
}

#[test]
fn test_filter_ignores_nested_vcs_content() {
    assert!(is_ignored(Path::new("Plugins/CVS/Root"), false));
    assert!(is_ignored(Path::new("Plugins/.svn/entries"), false));
    assert!(!is_ignored(Path::new("Plugins/Native/lib.so"), false));
}

#[test]
fn test_default_config_bundles_whole_tree() {
    let config = CheckConfig::default();
    assert_eq!(config.root, PathBuf::from("."));
    assert!(config.asset_bundle_dir.is_none());
    assert_eq!(config.bundle_root(), PathBuf::new());
    assert!(config.bundle_exclusions().is_empty());
}

#[test]
fn test_try_from_builder_rejects_escaping_bundle_dir() {
    let mut builder = CheckConfig::builder();
    builder
        .root("/project/Assets")
        .asset_bundle_dir(Some(PathBuf::from("../Shared")));

    let err = CheckConfig::try_from_builder(&builder).unwrap_err();
    assert!(matches!(err, CheckError::InvalidConfig { .. }));
    assert!(err.to_string().contains("../Shared"));
}

#[test]
fn test_try_from_builder_accepts_valid_args() {
    let mut builder = CheckConfig::builder();
    builder
        .root("/project/Assets")
        .exclude_asset_bundle_dirs(vec![PathBuf::from("Editor")])
        .follow_symlinks(true);

    let config = CheckConfig::try_from_builder(&builder).unwrap();
    assert!(config.follow_symlinks);
    assert_eq!(config.bundle_exclusions(), vec![PathBuf::from("Editor")]);
}
