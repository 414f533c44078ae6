//! JSON locale-file helpers.
//!
//! The engine never fetches translation files on its own; these helpers are
//! for callers that keep one `<locale>.json` per file on disk. They produce
//! eager trees (`scan_locale_dir`) or lazy sources (`file_loader`) that plug
//! straight into the engine's locale table.

use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use serde_json::Value;

use crate::locale::LocaleSource;

/// Result of scanning a locale directory.
#[derive(Debug, Default)]
pub struct ScanResult {
    pub locales: HashMap<String, Value>,
    /// Files that looked like locale files but could not be parsed.
    pub warnings: Vec<String>,
}

/// Read and parse one locale file into a message tree.
pub fn parse_message_file(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read locale file: {:?}", path))?;

    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse locale file: {:?}", path))
}

/// Extracts locale from filename.
///
/// Examples:
/// - "en.json" -> Some("en")
/// - "zh-CN.json" -> Some("zh-CN")
/// - "/path/to/locales/ja.json" -> Some("ja")
pub fn extract_locale(path: impl AsRef<Path>) -> Option<String> {
    let path = path.as_ref();
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(|s| s.to_string())
}

/// Scan a directory of `<locale>.json` files into eager message trees.
///
/// Unparseable files become warnings rather than failing the whole scan, so
/// one broken translation file does not take every locale down with it.
pub fn scan_locale_dir(dir: impl AsRef<Path>) -> Result<ScanResult> {
    let dir = dir.as_ref();
    let mut result = ScanResult::default();

    if !dir.exists() {
        bail!("Locale directory '{}' does not exist.", dir.display());
    }

    if !dir.is_dir() {
        bail!("'{}' is not a directory.", dir.display());
    }

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();

        if path.extension().and_then(|e| e.to_str()) == Some("json")
            && let Some(locale) = extract_locale(&path)
        {
            match parse_message_file(&path) {
                Ok(tree) => {
                    result.locales.insert(locale, tree);
                }
                Err(e) => {
                    result
                        .warnings
                        .push(format!("Failed to parse {:?}: {}", path, e));
                }
            }
        }
    }

    Ok(result)
}

/// Lazy locale source that reads `path` on first resolution.
pub fn file_loader(path: impl Into<PathBuf>) -> LocaleSource {
    let path = path.into();
    LocaleSource::loader(move || {
        let path = path.clone();
        async move { parse_message_file(&path) }
    })
}
