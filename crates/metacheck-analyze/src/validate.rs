//! Sidecar pairing, empty folder, and bundle name checks.

use std::collections::{BTreeMap, HashSet};

use itertools::Itertools;
use tracing::debug;

use metacheck_core::{CollectedTree, is_hidden_name};

use crate::result::ValidationResult;

/// Validate a collected tree. Pure; performs no I/O.
pub fn validate(tree: &CollectedTree) -> ValidationResult {
    let (covered, invalid_meta_files) = check_meta_files(tree);
    let invalid_asset_files = check_asset_files(tree, &covered);
    let empty_folders = tree
        .entries()
        .filter(|e| e.is_empty_dir())
        .map(|e| e.path.clone())
        .sorted()
        .collect_vec();
    let duplicate_asset_bundle_files = find_duplicate_bundle_names(tree);

    debug!(
        invalid_assets = invalid_asset_files.len(),
        invalid_meta = invalid_meta_files.len(),
        empty_folders = empty_folders.len(),
        duplicate_names = duplicate_asset_bundle_files.len(),
        "validation finished"
    );

    ValidationResult {
        base_path: tree.root().display().to_string(),
        invalid_asset_files,
        invalid_meta_files,
        empty_folders,
        duplicate_asset_bundle_files,
    }
}

/// Returns the asset paths covered by a sidecar, and the sorted sidecars
/// whose asset is missing.
fn check_meta_files(tree: &CollectedTree) -> (HashSet<&str>, Vec<String>) {
    let mut covered = HashSet::new();
    let mut orphans = Vec::new();

    for entry in tree.entries() {
        let Some(asset) = entry.asset_path() else {
            continue;
        };
        if tree.contains(asset) {
            covered.insert(asset);
        } else {
            orphans.push(entry.path.clone());
        }
    }

    orphans.sort();
    (covered, orphans)
}

/// Non-hidden, non-meta entries nobody's sidecar covers.
fn check_asset_files(tree: &CollectedTree, covered: &HashSet<&str>) -> Vec<String> {
    tree.entries()
        .filter(|e| !e.is_meta() && !is_hidden_name(&e.path))
        .filter(|e| !covered.contains(e.path.as_str()))
        .map(|e| e.path.clone())
        .sorted()
        .collect_vec()
}

fn find_duplicate_bundle_names(tree: &CollectedTree) -> BTreeMap<String, Vec<String>> {
    let groups = tree
        .entries()
        .filter(|e| e.is_bundle_candidate())
        .filter(|e| !e.name().is_empty() && !is_hidden_name(&e.path))
        .into_group_map_by(|e| e.name().to_owned());

    let mut duplicates: BTreeMap<String, Vec<String>> = groups
        .into_iter()
        .filter(|(_, members)| members.len() > 1)
        .map(|(name, members)| {
            let paths = members.into_iter().map(|e| e.path.clone()).sorted().collect_vec();
            (name, paths)
        })
        .collect();

    duplicates.retain(|_, paths| paths.len() > 1);
    duplicates
}

#[cfg(test)]
mod tests {
    use super::*;
    use metacheck_core::AssetEntry;

    fn tree(entries: Vec<AssetEntry>) -> CollectedTree {
        CollectedTree::from_entries("/assets", entries)
    }

    fn file(path: &str) -> AssetEntry {
        AssetEntry::file(path, path.to_ascii_lowercase().ends_with(".meta"), false)
    }

    fn bundle(path: &str) -> AssetEntry {
        AssetEntry::file(path, false, true)
    }

    #[test]
    fn test_missing_meta_and_empty_dir() {
        let result = validate(&tree(vec![
            file("a.txt"),
            file("a.txt.meta"),
            file("b.txt"),
            AssetEntry::directory("empty_dir"),
            file("empty_dir.meta"),
        ]));

        assert_eq!(result.invalid_asset_files, vec!["b.txt"]);
        assert!(result.invalid_meta_files.is_empty());
        assert_eq!(result.empty_folders, vec!["empty_dir"]);
    }

    #[test]
    fn test_directory_without_meta_is_invalid_asset() {
        let result = validate(&tree(vec![AssetEntry::directory("empty_dir")]));
        assert_eq!(result.invalid_asset_files, vec!["empty_dir"]);
        assert_eq!(result.empty_folders, vec!["empty_dir"]);
    }

    #[test]
    fn test_orphan_meta() {
        let result = validate(&tree(vec![file("c.txt.meta")]));
        assert_eq!(result.invalid_meta_files, vec!["c.txt.meta"]);
        assert!(result.invalid_asset_files.is_empty());
    }

    #[test]
    fn test_meta_covers_directory() {
        let result = validate(&tree(vec![
            AssetEntry::directory("Art"),
            file("Art.meta"),
            file("Art/hero.png"),
            file("Art/hero.png.meta"),
        ]));
        assert!(!result.has_content());
    }

    #[test]
    fn test_hidden_entries_skip_asset_check() {
        let result = validate(&tree(vec![file(".gitkeep"), file("Art/.DS_Store")]));
        assert!(result.invalid_asset_files.is_empty());
    }

    #[test]
    fn test_hidden_orphan_meta_still_reported() {
        let result = validate(&tree(vec![file(".hidden.meta")]));
        assert_eq!(result.invalid_meta_files, vec![".hidden.meta"]);
    }

    #[test]
    fn test_duplicate_bundle_names() {
        let result = validate(&tree(vec![
            bundle("bundle/y/icon.png"),
            bundle("bundle/x/icon.png"),
            bundle("bundle/x/logo.png"),
        ]));

        assert_eq!(result.duplicate_asset_bundle_files.len(), 1);
        assert_eq!(
            result.duplicate_asset_bundle_files["icon.png"],
            vec!["bundle/x/icon.png", "bundle/y/icon.png"]
        );
    }

    #[test]
    fn test_hidden_bundle_files_not_grouped() {
        let result = validate(&tree(vec![bundle("bundle/x/.keep"), bundle("bundle/y/.keep")]));
        assert!(result.duplicate_asset_bundle_files.is_empty());
    }

    #[test]
    fn test_same_name_outside_bundle_ignored() {
        let result = validate(&tree(vec![bundle("bundle/icon.png"), file("scenes/icon.png")]));
        assert!(result.duplicate_asset_bundle_files.is_empty());
    }

    #[test]
    fn test_validate_is_idempotent() {
        let t = tree(vec![
            file("a.txt"),
            file("z.txt.meta"),
            AssetEntry::directory("d"),
            bundle("b/1/x.png"),
            bundle("b/2/x.png"),
        ]);
        assert_eq!(validate(&t), validate(&t));
    }
}
