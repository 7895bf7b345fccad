//! Directory tree collector for metacheck.
//!
//! Walks an asset root once with jwalk, drops entries rejected by the path
//! filter, and classifies the rest into a [`CollectedTree`].
//!
//! # Example
//!
//! ```rust,no_run
//! use metacheck_scan::{CheckConfig, TreeCollector};
//!
//! let config = CheckConfig::new("/path/to/Assets");
//! let tree = TreeCollector::new().collect(&config).unwrap();
//!
//! println!("Collected {} entries", tree.len());
//! ```

mod classify;
mod collector;

pub use classify::EntryClassifier;
pub use collector::TreeCollector;

// Re-export core types for convenience
pub use metacheck_core::{AssetEntry, CheckConfig, CheckError, CollectedTree, EntryKind};
