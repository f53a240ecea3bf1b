//! Extraction of localized-string usages from source text.
//!
//! This is a line-oriented textual heuristic, not a C++ parser: calls split
//! across lines, escaped quotes and string concatenation are not understood.
//! Comments are not special either; a call inside a comment counts unless the
//! line carries the exemption marker.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use regex::Regex;

use crate::core::{KeyUsage, SourceContext, SourceLocation};

pub struct UsageExtractor {
    pattern: Regex,
    exemption_marker: String,
}

impl UsageExtractor {
    /// Build an extractor for `<call_name>("<key>")` calls.
    ///
    /// Whitespace is allowed around the parentheses. The key capture is lazy,
    /// ending at the first quote followed by the closing parenthesis.
    pub fn new(call_name: &str, exemption_marker: impl Into<String>) -> Result<Self> {
        let source = format!(r#"{}\s*\(\s*"(.*?)"\s*\)"#, regex::escape(call_name));
        let pattern = Regex::new(&source)
            .with_context(|| format!("Invalid usage pattern for call '{}'", call_name))?;

        Ok(Self {
            pattern,
            exemption_marker: exemption_marker.into(),
        })
    }

    pub fn is_exempt(&self, line: &str) -> bool {
        line.contains(&self.exemption_marker)
    }

    /// All usages in `content`, in line order then left to right.
    pub fn extract(&self, file_path: &str, content: &str) -> Vec<KeyUsage> {
        let mut usages = Vec::new();

        for (index, line) in content.lines().enumerate() {
            if self.is_exempt(line) {
                continue;
            }

            for caps in self.pattern.captures_iter(line) {
                let (Some(call), Some(key)) = (caps.get(0), caps.get(1)) else {
                    continue;
                };
                let col = line[..call.start()].chars().count() + 1;
                usages.push(KeyUsage {
                    key: key.as_str().to_string(),
                    context: SourceContext::new(
                        SourceLocation::new(file_path, index + 1, col),
                        line,
                    ),
                });
            }
        }

        usages
    }

    /// Read `path` and extract its usages.
    pub fn extract_file(&self, path: &Path) -> Result<Vec<KeyUsage>> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Could not read source file {}", path.display()))?;
        Ok(self.extract(&path.to_string_lossy(), &content))
    }
}
