//! Check configuration types.

use std::path::{Component, Path, PathBuf};

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::error::CheckError;

/// Configuration for a single audit run.
#[derive(Debug, Clone, Builder, Serialize, Deserialize)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct CheckConfig {
    /// Root directory to scan.
    pub root: PathBuf,

    /// Bundle root, relative to `root`. `None` means the whole tree.
    #[builder(default)]
    #[serde(default)]
    pub asset_bundle_dir: Option<PathBuf>,

    /// Sub-paths, relative to `root`, that never hold bundle candidates.
    #[builder(default)]
    #[serde(default)]
    pub exclude_asset_bundle_dirs: Vec<PathBuf>,

    /// Follow symbolic links while walking.
    #[builder(default = "false")]
    #[serde(default)]
    pub follow_symlinks: bool,
}

impl CheckConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        match self.root {
            Some(ref root) if root.as_os_str().is_empty() => {
                return Err("Root path cannot be empty".to_string());
            }
            Some(_) => {}
            None => return Err("Root path is required".to_string()),
        }

        if let Some(Some(ref dir)) = self.asset_bundle_dir {
            check_relative(dir)?;
        }
        if let Some(ref dirs) = self.exclude_asset_bundle_dirs {
            for dir in dirs {
                check_relative(dir)?;
            }
        }
        Ok(())
    }
}

fn check_relative(path: &Path) -> Result<(), String> {
    let escapes = path.components().any(|c| {
        matches!(
            c,
            Component::RootDir | Component::Prefix(_) | Component::ParentDir
        )
    });
    if escapes {
        return Err(format!(
            "Bundle paths must be relative to the target path: {}",
            path.display()
        ));
    }
    Ok(())
}

impl CheckConfig {
    /// Create a new check config builder.
    pub fn builder() -> CheckConfigBuilder {
        CheckConfigBuilder::default()
    }

    /// Create a config whose bundle root is the whole tree.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            asset_bundle_dir: None,
            exclude_asset_bundle_dirs: Vec::new(),
            follow_symlinks: false,
        }
    }

    /// Build a config, mapping builder failures to [`CheckError`].
    pub fn try_from_builder(builder: &CheckConfigBuilder) -> Result<Self, CheckError> {
        builder
            .build()
            .map_err(|e| CheckError::invalid_config(e.to_string()))
    }

    /// Bundle root with `.` components dropped. Empty when unset.
    pub fn bundle_root(&self) -> PathBuf {
        self.asset_bundle_dir
            .as_deref()
            .map(normalize)
            .unwrap_or_default()
    }

    /// Excluded bundle sub-paths with `.` components dropped.
    pub fn bundle_exclusions(&self) -> Vec<PathBuf> {
        self.exclude_asset_bundle_dirs
            .iter()
            .map(|p| normalize(p))
            .collect()
    }
}

fn normalize(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self::new(".")
    }
}
