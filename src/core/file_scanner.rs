use std::path::{Path, PathBuf};

use colored::Colorize;
use glob::Pattern;
use walkdir::WalkDir;

/// Result of scanning files.
pub struct ScanResult {
    /// Matching source files, in walk order (sorted by file name per directory).
    pub files: Vec<PathBuf>,
    pub skipped_count: usize,
}

/// Recursively collect source files under `base_dir`.
///
/// A file is kept when its extension is one of `extensions` and neither its
/// full path nor its path relative to `base_dir` matches an ignore pattern.
/// Unreadable directory entries are skipped and counted.
pub fn scan_files(
    base_dir: &Path,
    extensions: &[String],
    ignore_patterns: &[Pattern],
    verbose: bool,
) -> ScanResult {
    let mut files = Vec::new();
    let mut skipped_count = 0;

    for entry in WalkDir::new(base_dir).sort_by_file_name() {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                skipped_count += 1;
                if verbose {
                    eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                }
                continue;
            }
        };

        let path = entry.path();
        if !path.is_file() || !has_source_extension(path, extensions) {
            continue;
        }

        let relative = path.strip_prefix(base_dir).unwrap_or(path);
        if ignore_patterns
            .iter()
            .any(|p| p.matches_path(path) || p.matches_path(relative))
        {
            continue;
        }

        files.push(path.to_path_buf());
    }

    ScanResult {
        files,
        skipped_count,
    }
}

fn has_source_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| extensions.iter().any(|allowed| allowed == ext))
}
