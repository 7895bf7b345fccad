//! Validation rules and report rendering for metacheck.
//!
//! [`validate`] turns a [`CollectedTree`] into a [`ValidationResult`] with
//! four independent findings:
//!
//! - **Invalid asset files** - files and folders without a `.meta` sidecar
//! - **Invalid meta files** - `.meta` files whose asset is missing
//! - **Empty folders** - directories with nothing collected under them
//! - **Duplicate bundle files** - bundle candidates sharing a file name
//!
//! ```rust,ignore
//! use metacheck_analyze::{report, validate, Language};
//! use metacheck_scan::{CheckConfig, TreeCollector};
//!
//! let tree = TreeCollector::new().collect(&CheckConfig::new("Assets")).unwrap();
//! let result = validate(&tree);
//!
//! print!("{}", report::render_text(&result, Language::English));
//! std::process::exit(report::exit_code(&result).into());
//! ```

pub mod report;
mod result;
mod validate;

pub use report::Language;
pub use result::{FindingCategory, ValidationResult};
pub use validate::validate;

// Re-export core types
pub use metacheck_core::{AssetEntry, CollectedTree};
