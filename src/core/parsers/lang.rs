use std::{fs, path::Path};

use anyhow::{Context, Result, bail};
use serde_json::{Map, Value};

use crate::core::TranslationTable;

/// Parse one translation table file.
///
/// The file must hold a single JSON object. Values are kept as-is; only the
/// key set matters for completeness checking.
pub fn parse_lang_file(path: &Path) -> Result<TranslationTable> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Could not read {}", path.display()))?;

    let entries: Map<String, Value> = serde_json::from_str(&content)
        .with_context(|| format!("Invalid JSON format in {}", path.display()))?;

    let name =
        table_name(path).with_context(|| format!("Invalid file name: {}", path.display()))?;

    Ok(TranslationTable::new(name, path, entries))
}

/// Extracts the table identifier from a path.
///
/// Examples:
/// - "en.lang" -> Some("en.lang")
/// - "/path/to/data/lang/ja.lang" -> Some("ja.lang")
pub fn table_name(path: impl AsRef<Path>) -> Option<String> {
    path.as_ref()
        .file_name()
        .and_then(|s| s.to_str())
        .map(|s| s.to_string())
}

/// Load every `*.<extension>` file directly inside `lang_dir`, ordered by name.
///
/// A single unreadable or malformed table fails the whole load: comparing
/// against a partial set of languages would hide missing translations.
pub fn scan_lang_files(
    lang_dir: impl AsRef<Path>,
    extension: &str,
) -> Result<Vec<TranslationTable>> {
    let lang_dir = lang_dir.as_ref();

    if !lang_dir.is_dir() {
        bail!("'{}' is not a directory.", lang_dir.display());
    }

    let mut paths = Vec::new();
    for entry in fs::read_dir(lang_dir)
        .with_context(|| format!("Could not list {}", lang_dir.display()))?
    {
        let path = entry?.path();
        if path.is_file() && path.extension().and_then(|e| e.to_str()) == Some(extension) {
            paths.push(path);
        }
    }
    paths.sort();

    paths.iter().map(|path| parse_lang_file(path)).collect()
}
