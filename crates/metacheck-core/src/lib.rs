//! Core types for metacheck.
//!
//! This crate provides the data structures shared by the collector and the
//! validator: classified asset entries, the collected tree, the path filter
//! and the check configuration.

mod config;
mod entry;
mod error;
pub mod filter;
mod tree;

pub use config::{CheckConfig, CheckConfigBuilder};
pub use entry::{AssetEntry, EntryKind};
pub use error::CheckError;
pub use tree::CollectedTree;

/// Extension of metadata sidecar files, without the leading dot.
pub const META_EXTENSION: &str = "meta";

/// Number of bytes stripped from a metadata path to get its asset path.
pub const META_SUFFIX_LEN: usize = META_EXTENSION.len() + 1;

/// Leading character of hidden files and directories.
pub const HIDDEN_MARKER: char = '.';

/// Returns true if the final component of `path` starts with the hidden marker.
pub fn is_hidden_name(path: &str) -> bool {
    base_name(path).starts_with(HIDDEN_MARKER)
}

/// Final `/`-separated component of a relative path.
pub fn base_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Parent of a relative path, or `None` for a top-level entry.
pub fn parent_path(path: &str) -> Option<&str> {
    path.rfind('/').map(|idx| &path[..idx])
}
