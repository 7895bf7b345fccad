//! Classified filesystem entries.

use serde::{Deserialize, Serialize};

/// Whether an entry is a directory or a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryKind {
    /// Directory.
    Directory {
        /// True when no other collected entry lives directly under it.
        is_empty: bool,
    },
    /// Anything that is not a directory (regular files, symlinks, ...).
    File {
        /// File carries the metadata sidecar extension.
        is_meta: bool,
        /// File lives under the bundle root and outside every excluded dir.
        is_bundle_candidate: bool,
    },
}

/// One collected filesystem entry, keyed by its path relative to the root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetEntry {
    /// Relative path using `/` separators.
    pub path: String,
    /// Entry classification.
    pub kind: EntryKind,
}

impl AssetEntry {
    /// Create a directory entry. Emptiness is settled by [`CollectedTree`].
    ///
    /// [`CollectedTree`]: crate::CollectedTree
    pub fn directory(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind: EntryKind::Directory { is_empty: true },
        }
    }

    /// Create a file entry.
    pub fn file(path: impl Into<String>, is_meta: bool, is_bundle_candidate: bool) -> Self {
        Self {
            path: path.into(),
            kind: EntryKind::File {
                is_meta,
                is_bundle_candidate,
            },
        }
    }

    /// Check if this is a directory.
    pub fn is_dir(&self) -> bool {
        matches!(self.kind, EntryKind::Directory { .. })
    }

    /// Check if this is a directory without collected children.
    pub fn is_empty_dir(&self) -> bool {
        matches!(self.kind, EntryKind::Directory { is_empty: true })
    }

    /// Check if this is a metadata sidecar file.
    pub fn is_meta(&self) -> bool {
        matches!(self.kind, EntryKind::File { is_meta: true, .. })
    }

    /// Check if this file is subject to unique naming inside the bundle.
    pub fn is_bundle_candidate(&self) -> bool {
        matches!(
            self.kind,
            EntryKind::File {
                is_bundle_candidate: true,
                ..
            }
        )
    }

    /// Final path component.
    pub fn name(&self) -> &str {
        crate::base_name(&self.path)
    }

    /// Path of the asset this metadata file describes.
    ///
    /// Returns `None` for anything that is not a metadata file.
    pub fn asset_path(&self) -> Option<&str> {
        if !self.is_meta() {
            return None;
        }
        let end = self.path.len().checked_sub(crate::META_SUFFIX_LEN)?;
        self.path.get(..end)
    }
}
