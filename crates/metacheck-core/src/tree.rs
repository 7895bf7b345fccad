//! Collected tree container.

use std::collections::{HashMap, HashSet};
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::entry::{AssetEntry, EntryKind};

/// Every collected entry of one scan, keyed by relative path.
///
/// The tree is immutable once built. Directory emptiness is derived here
/// from the full set of paths, so the order entries were visited in does
/// not matter.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CollectedTree {
    root: PathBuf,
    entries: HashMap<String, AssetEntry>,
}

impl CollectedTree {
    /// Build a tree from classified entries.
    ///
    /// A later entry with the same path replaces an earlier one.
    pub fn from_entries(
        root: impl Into<PathBuf>,
        entries: impl IntoIterator<Item = AssetEntry>,
    ) -> Self {
        let mut entries: HashMap<String, AssetEntry> = entries
            .into_iter()
            .map(|entry| (entry.path.clone(), entry))
            .collect();

        let parents: HashSet<String> = entries
            .keys()
            .filter_map(|path| crate::parent_path(path))
            .map(str::to_owned)
            .collect();

        for (path, entry) in entries.iter_mut() {
            if let EntryKind::Directory { is_empty } = &mut entry.kind {
                *is_empty = !parents.contains(path);
            }
        }

        Self {
            root: root.into(),
            entries,
        }
    }

    /// Root directory that was scanned.
    pub fn root(&self) -> &PathBuf {
        &self.root
    }

    /// Look up an entry by relative path.
    pub fn get(&self, path: &str) -> Option<&AssetEntry> {
        self.entries.get(path)
    }

    /// Check if a relative path was collected.
    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    /// Iterate over all entries in arbitrary order.
    pub fn entries(&self) -> impl Iterator<Item = &AssetEntry> {
        self.entries.values()
    }

    /// Number of collected entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing was collected.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of directories.
    pub fn dir_count(&self) -> usize {
        self.entries().filter(|e| e.is_dir()).count()
    }

    /// Number of metadata files.
    pub fn meta_count(&self) -> usize {
        self.entries().filter(|e| e.is_meta()).count()
    }
}
