//! Validation findings.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator};

/// Kind of finding, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum FindingCategory {
    /// Asset file or folder without a metadata sidecar.
    InvalidAssetFiles,
    /// Metadata sidecar without its asset.
    InvalidMetaFiles,
    /// Directory with no collected children.
    EmptyFolders,
    /// Bundle candidates sharing a base name.
    DuplicateAssetBundleFiles,
}

/// Everything one validation pass found.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Root directory that was scanned.
    pub base_path: String,

    /// Sorted paths lacking a metadata sidecar.
    pub invalid_asset_files: Vec<String>,

    /// Sorted metadata paths whose asset does not exist.
    pub invalid_meta_files: Vec<String>,

    /// Sorted paths of empty directories.
    pub empty_folders: Vec<String>,

    /// Base name to the sorted paths sharing it. Every group has 2+ members.
    #[serde(rename = "duplicate_assetbundle_files")]
    pub duplicate_asset_bundle_files: BTreeMap<String, Vec<String>>,
}

impl ValidationResult {
    /// Check if any category has findings.
    pub fn has_content(&self) -> bool {
        FindingCategory::iter().any(|c| self.has(c))
    }

    /// Check if a single category has findings.
    pub fn has(&self, category: FindingCategory) -> bool {
        match category {
            FindingCategory::InvalidAssetFiles => !self.invalid_asset_files.is_empty(),
            FindingCategory::InvalidMetaFiles => !self.invalid_meta_files.is_empty(),
            FindingCategory::EmptyFolders => !self.empty_folders.is_empty(),
            FindingCategory::DuplicateAssetBundleFiles => self
                .duplicate_asset_bundle_files
                .values()
                .any(|paths| paths.len() > 1),
        }
    }

    /// Categories with findings, in report order.
    pub fn categories(&self) -> Vec<FindingCategory> {
        FindingCategory::iter().filter(|c| self.has(*c)).collect()
    }

    /// Total number of reported items across all categories.
    pub fn finding_count(&self) -> usize {
        self.invalid_asset_files.len()
            + self.invalid_meta_files.len()
            + self.empty_folders.len()
            + self.duplicate_asset_bundle_files.len()
    }
}
