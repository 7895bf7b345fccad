//! Entry classification.

use std::path::{Path, PathBuf};

use metacheck_core::{AssetEntry, CheckConfig, META_EXTENSION};

/// Turns relative paths into [`AssetEntry`] values.
///
/// Pure: no filesystem access, so it can be driven by the collector or by
/// hand in tests.
#[derive(Debug, Clone, Default)]
pub struct EntryClassifier {
    bundle_root: PathBuf,
    exclusions: Vec<PathBuf>,
}

impl EntryClassifier {
    /// Create a classifier for the bundle settings in `config`.
    pub fn new(config: &CheckConfig) -> Self {
        Self {
            bundle_root: config.bundle_root(),
            exclusions: config.bundle_exclusions(),
        }
    }

    /// Classify one entry given its path relative to the scan root.
    pub fn classify(&self, relative: &Path, is_dir: bool) -> AssetEntry {
        let key = relative_key(relative);
        if is_dir {
            return AssetEntry::directory(key);
        }

        if is_meta_path(relative) {
            AssetEntry::file(key, true, false)
        } else {
            let candidate = self.is_bundle_path(relative);
            AssetEntry::file(key, false, candidate)
        }
    }

    /// Path lies under the bundle root and under no excluded directory.
    pub fn is_bundle_path(&self, relative: &Path) -> bool {
        relative.starts_with(&self.bundle_root)
            && !self.exclusions.iter().any(|ex| relative.starts_with(ex))
    }
}

/// File name ends with `.meta`, ignoring ASCII case. A bare `.meta` counts.
pub(crate) fn is_meta_path(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| {
            name.to_ascii_lowercase()
                .strip_suffix(META_EXTENSION)
                .is_some_and(|stem| stem.ends_with('.'))
        })
}

/// Relative path joined with `/`, independent of the platform separator.
pub(crate) fn relative_key(relative: &Path) -> String {
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
