use std::fs;
use std::path::PathBuf;

use metacheck_scan::{CheckConfig, TreeCollector};
use tempfile::TempDir;

fn bundle_tree() -> TempDir {
    let temp = TempDir::new().unwrap();
    let root = temp.path();

    fs::create_dir_all(root.join("bundle/x")).unwrap();
    fs::create_dir_all(root.join("bundle/y")).unwrap();
    fs::create_dir_all(root.join("scenes")).unwrap();

    fs::write(root.join("bundle/x/icon.png"), "x").unwrap();
    fs::write(root.join("bundle/y/icon.png"), "y").unwrap();
    fs::write(root.join("bundle/y/icon.png.meta"), "guid").unwrap();
    fs::write(root.join("scenes/icon.png"), "s").unwrap();

    temp
}

#[test]
fn test_bundle_candidates_marked() {
    let temp = bundle_tree();
    let config = CheckConfig::builder()
        .root(temp.path())
        .asset_bundle_dir(Some(PathBuf::from("bundle")))
        .build()
        .unwrap();

    let tree = TreeCollector::new().collect(&config).unwrap();

    assert!(tree.get("bundle/x/icon.png").unwrap().is_bundle_candidate());
    assert!(tree.get("bundle/y/icon.png").unwrap().is_bundle_candidate());
    assert!(!tree.get("bundle/y/icon.png.meta").unwrap().is_bundle_candidate());
    assert!(!tree.get("scenes/icon.png").unwrap().is_bundle_candidate());
}

#[test]
fn test_excluded_bundle_dir() {
    let temp = bundle_tree();
    let config = CheckConfig::builder()
        .root(temp.path())
        .asset_bundle_dir(Some(PathBuf::from("bundle")))
        .exclude_asset_bundle_dirs(vec![PathBuf::from("bundle/y")])
        .build()
        .unwrap();

    let tree = TreeCollector::new().collect(&config).unwrap();

    assert!(tree.get("bundle/x/icon.png").unwrap().is_bundle_candidate());
    assert!(!tree.get("bundle/y/icon.png").unwrap().is_bundle_candidate());
}

#[test]
fn test_root_recorded_as_canonical_path() {
    let temp = bundle_tree();
    let tree = TreeCollector::new()
        .collect(&CheckConfig::new(temp.path()))
        .unwrap();

    assert_eq!(tree.root(), &temp.path().canonicalize().unwrap());
    assert!(!tree.contains(""));
}

#[test]
fn test_collect_is_repeatable() {
    let temp = bundle_tree();
    let config = CheckConfig::new(temp.path());
    let collector = TreeCollector::new();

    let first = collector.collect(&config).unwrap();
    let second = collector.collect(&config).unwrap();

    let mut a: Vec<_> = first.entries().cloned().collect();
    let mut b: Vec<_> = second.entries().cloned().collect();
    a.sort_by(|x, y| x.path.cmp(&y.path));
    b.sort_by(|x, y| x.path.cmp(&y.path));
    assert_eq!(a, b);
}
