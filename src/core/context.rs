use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use colored::Colorize;
use glob::Pattern;
use rayon::prelude::*;

use crate::{
    config::{Config, load_config},
    core::{
        KeyUsage, TranslationTable,
        extract::UsageExtractor,
        file_scanner::{ScanResult, scan_files},
        parsers::lang::scan_lang_files,
    },
};

/// Everything a localization check needs, resolved once up front.
///
/// # Configuration Priority
///
/// 1. CLI arguments (e.g. `--lang-root`)
/// 2. `.esperrc.json` config file
/// 3. Built-in defaults
pub struct CheckContext {
    /// Merged configuration (CLI args > config file > defaults).
    pub config: Config,

    /// Absolute project root; every scanned path is below it.
    pub root_dir: PathBuf,

    /// Directory holding the translation tables.
    pub lang_dir: PathBuf,

    pub verbose: bool,

    ignore_patterns: Vec<Pattern>,
    extractor: UsageExtractor,
}

impl CheckContext {
    /// Create a context rooted at `root` (current directory when `None`).
    ///
    /// # Errors
    ///
    /// Returns error if the root cannot be made absolute, the config file is
    /// invalid, or the configured call name does not form a valid pattern.
    pub fn new(root: Option<&Path>, lang_root: Option<&Path>, verbose: bool) -> Result<Self> {
        let root = root.unwrap_or_else(|| Path::new("."));
        let root_dir = std::path::absolute(root)
            .with_context(|| format!("Invalid root directory: {}", root.display()))?;

        let config_result = load_config(&root_dir)?;
        if verbose && let Some(path) = &config_result.source {
            eprintln!("{} Using config {}", "info:".bold().cyan(), path.display());
        }
        let config = config_result.config;

        let lang_dir = match lang_root {
            Some(dir) => root_dir.join(dir),
            None => root_dir.join(&config.lang_root),
        };

        let ignore_patterns = config.ignore_patterns()?;
        let extractor = UsageExtractor::new(&config.call_name, config.exemption_marker.clone())?;

        Ok(Self {
            config,
            root_dir,
            lang_dir,
            verbose,
            ignore_patterns,
            extractor,
        })
    }

    pub fn has_lang_dir(&self) -> bool {
        self.lang_dir.is_dir()
    }

    /// Load the tables and walk the source tree in parallel.
    ///
    /// A table error wins over the scan result, so a malformed table aborts
    /// the check before anything about sources is reported.
    pub fn load(&self) -> Result<(Vec<TranslationTable>, ScanResult)> {
        let (tables, scan_result) = rayon::join(
            || scan_lang_files(&self.lang_dir, &self.config.lang_extension),
            || {
                scan_files(
                    &self.root_dir,
                    &self.config.source_extensions,
                    &self.ignore_patterns,
                    self.verbose,
                )
            },
        );
        let tables = tables?;

        if scan_result.skipped_count > 0 {
            eprintln!(
                "Warning: {} path(s) skipped due to access errors{}",
                scan_result.skipped_count,
                if self.verbose { "" } else { " (use -v for details)" }
            );
        }

        Ok((tables, scan_result))
    }

    /// Extract usages from every file, preserving the order of `files`.
    pub fn collect_usages(&self, files: &[PathBuf]) -> Result<Vec<KeyUsage>> {
        let per_file: Vec<Vec<KeyUsage>> = files
            .par_iter()
            .map(|path| self.extractor.extract_file(path))
            .collect::<Result<_>>()?;

        Ok(per_file.into_iter().flatten().collect())
    }
}
