//! Path filter: decides which entries never reach classification.
//!
//! Editor backups (`name~`), temporary files (`*.tmp`), and anything inside
//! a hidden or version-control directory are ignored. The filter works on
//! paths relative to the scanned root so the location of the root itself
//! never matters.

use std::path::{Component, Path};

/// Trailing character of editor backup files.
pub const BACKUP_MARKER: char = '~';

/// Extension of temporary files, without the leading dot.
pub const TEMP_EXTENSION: &str = "tmp";

/// Version-control directory names, compared case-insensitively.
pub const VCS_DIRS: &[&str] = &["cvs"];

/// Returns true if `path` (relative to the scan root) should be skipped.
///
/// `is_dir` marks entries that are directories themselves; a transient
/// directory is dropped together with its contents.
pub fn is_ignored(path: &Path, is_dir: bool) -> bool {
    if is_backup_or_temp(path) {
        return true;
    }

    let mut dirs: Vec<&str> = normal_components(path).collect();
    if !is_dir {
        dirs.pop();
    }
    dirs.into_iter().any(is_transient_dir)
}

/// Backup files end with `~`; temporary files carry the `.tmp` extension.
pub fn is_backup_or_temp(path: &Path) -> bool {
    let ends_with_marker = path
        .as_os_str()
        .to_string_lossy()
        .ends_with(BACKUP_MARKER);
    ends_with_marker || path.extension().is_some_and(|ext| ext == TEMP_EXTENSION)
}

/// Hidden (`.name`) and version-control directory names are transient.
pub fn is_transient_dir(name: &str) -> bool {
    if name.is_empty() {
        return false;
    }
    name.starts_with(crate::HIDDEN_MARKER)
        || VCS_DIRS.iter().any(|vcs| name.eq_ignore_ascii_case(vcs))
}

fn normal_components(path: &Path) -> impl Iterator<Item = &str> {
    path.components().filter_map(|c| match c {
        Component::Normal(name) => name.to_str(),
        _ => None,
    })
}
