//! Report rendering and exit status.

use std::fmt::Write;

use crate::result::{FindingCategory, ValidationResult};

/// Exit code when no category has findings.
pub const EXIT_CLEAN: u8 = 0;

/// Exit code when at least one category has findings.
pub const EXIT_FINDINGS: u8 = 1;

/// Language of text report headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    English,
    Japanese,
}

impl FindingCategory {
    /// Section header for this category.
    pub fn header(self, lang: Language) -> &'static str {
        match (lang, self) {
            (Language::English, Self::InvalidAssetFiles) => "Files or folders without a .meta file",
            (Language::English, Self::InvalidMetaFiles) => ".meta files without a file or folder",
            (Language::English, Self::EmptyFolders) => "Empty folders",
            (Language::English, Self::DuplicateAssetBundleFiles) => {
                "Files sharing a name in the AssetBundle"
            }
            (Language::Japanese, Self::InvalidAssetFiles) => {
                "metaファイルのないファイルやフォルダが存在します"
            }
            (Language::Japanese, Self::InvalidMetaFiles) => {
                "ファイルやフォルダのないmetaファイルが存在します"
            }
            (Language::Japanese, Self::EmptyFolders) => "空のフォルダが存在します",
            (Language::Japanese, Self::DuplicateAssetBundleFiles) => {
                "AssetBundleに同じ名前のファイルが存在します"
            }
        }
    }
}

/// Line printed when nothing was found.
pub const SUCCESS_LINE: &str = "[OK] No errors!";

/// Render grouped, human-readable text. Always ends with a newline.
pub fn render_text(result: &ValidationResult, lang: Language) -> String {
    let mut out = String::new();

    if !result.has_content() {
        out.push_str(SUCCESS_LINE);
        out.push('\n');
        return out;
    }

    for category in result.categories() {
        let _ = writeln!(out, "## {}", category.header(lang));
        match category {
            FindingCategory::InvalidAssetFiles => push_items(&mut out, &result.invalid_asset_files),
            FindingCategory::InvalidMetaFiles => push_items(&mut out, &result.invalid_meta_files),
            FindingCategory::EmptyFolders => push_items(&mut out, &result.empty_folders),
            FindingCategory::DuplicateAssetBundleFiles => {
                for (name, paths) in &result.duplicate_asset_bundle_files {
                    if paths.len() < 2 {
                        continue;
                    }
                    let _ = writeln!(out, "- {name}");
                    for path in paths {
                        let _ = writeln!(out, "  - {path}");
                    }
                }
            }
        }
    }

    out
}

fn push_items(out: &mut String, items: &[String]) {
    for item in items {
        let _ = writeln!(out, "- {item}");
    }
}

/// Render the result as pretty-printed JSON.
pub fn render_json(result: &ValidationResult) -> serde_json::Result<String> {
    serde_json::to_string_pretty(result)
}

/// Process exit code for a result.
pub fn exit_code(result: &ValidationResult) -> u8 {
    if result.has_content() {
        EXIT_FINDINGS
    } else {
        EXIT_CLEAN
    }
}
