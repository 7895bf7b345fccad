//! JWalk-based tree collector.

use std::path::{Path, PathBuf};

use jwalk::{Parallelism, WalkDir};
use tracing::{debug, trace, warn};

use metacheck_core::filter::{is_ignored, is_transient_dir};
use metacheck_core::{AssetEntry, CheckConfig, CheckError, CollectedTree};

use crate::classify::EntryClassifier;

/// Collects every entry under a root directory in a single serial walk.
#[derive(Debug, Default)]
pub struct TreeCollector;

impl TreeCollector {
    /// Create a new collector.
    pub fn new() -> Self {
        Self
    }

    /// Walk `config.root` and classify every entry the path filter keeps.
    ///
    /// The root itself is not collected. Any traversal error aborts the
    /// whole collection; no partial tree is returned.
    pub fn collect(&self, config: &CheckConfig) -> Result<CollectedTree, CheckError> {
        let root_path = config
            .root
            .canonicalize()
            .map_err(|e| CheckError::io(&config.root, e))?;

        if !root_path.is_dir() {
            return Err(CheckError::NotADirectory { path: root_path });
        }

        let classifier = EntryClassifier::new(config);
        let entries = self.collect_entries(config, &root_path, &classifier)?;

        let tree = CollectedTree::from_entries(root_path, entries);
        debug!(
            root = %tree.root().display(),
            entries = tree.len(),
            dirs = tree.dir_count(),
            meta_files = tree.meta_count(),
            "collected asset tree"
        );
        Ok(tree)
    }

    fn collect_entries(
        &self,
        config: &CheckConfig,
        root_path: &Path,
        classifier: &EntryClassifier,
    ) -> Result<Vec<AssetEntry>, CheckError> {
        let mut entries = Vec::new();
        let mut ignored = 0usize;

        for entry_result in walker(config, root_path) {
            let entry = match entry_result {
                Ok(e) => e,
                Err(err) => {
                    let path = err.path().map(|p| p.to_path_buf()).unwrap_or_default();
                    if is_ignored_error_path(root_path, &path) {
                        warn!(
                            path = %path.display(),
                            error = %err,
                            "skipping error in ignored path"
                        );
                        continue;
                    }
                    return Err(walk_error(path, err));
                }
            };

            let path = entry.path();
            let Ok(relative) = path.strip_prefix(root_path) else {
                continue;
            };
            let is_dir = entry.file_type().is_dir();

            if is_ignored(relative, is_dir) {
                trace!(path = %relative.display(), "ignored");
                ignored += 1;
                continue;
            }

            entries.push(classifier.classify(relative, is_dir));
        }

        debug!(kept = entries.len(), ignored, "walk finished");
        Ok(entries)
    }
}

/// Serial, sorted walk that never reads transient directories.
fn walker(config: &CheckConfig, root_path: &Path) -> WalkDir {
    WalkDir::new(root_path)
        .parallelism(Parallelism::Serial)
        .sort(true)
        .skip_hidden(false)
        .follow_links(config.follow_symlinks)
        .min_depth(1)
        .process_read_dir(|_depth, _path, _state, children| {
            children.retain(|child| match child {
                Ok(entry) => {
                    let name = entry.file_name().to_string_lossy();
                    !is_pruned(&name, entry.file_type().is_dir())
                }
                Err(_) => true,
            });
        })
}

/// Hidden and version-control directories are dropped before they are read.
fn is_pruned(name: &str, is_dir: bool) -> bool {
    is_dir && is_transient_dir(name)
}

/// Walk errors come from reading directories, so the failing path is
/// checked as a directory: an error on `.git` itself is ignorable.
fn is_ignored_error_path(root_path: &Path, path: &Path) -> bool {
    path.strip_prefix(root_path)
        .is_ok_and(|rel| !rel.as_os_str().is_empty() && is_ignored(rel, true))
}

fn walk_error(path: PathBuf, err: jwalk::Error) -> CheckError {
    let message = err.to_string();
    match err.into_io_error() {
        Some(source) => CheckError::io(path, source),
        None => CheckError::Walk { path, message },
    }
}
