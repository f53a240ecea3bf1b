use std::path::PathBuf;

use serde_json::{Map, Value};

use super::SourceContext;

/// One language's translation table, loaded from a `.lang` file.
#[derive(Debug, Clone, PartialEq)]
pub struct TranslationTable {
    /// File name identifying the language (e.g. `"fr.lang"`).
    pub name: String,
    pub path: PathBuf,
    entries: Map<String, Value>,
}

impl TranslationTable {
    pub fn new(
        name: impl Into<String>,
        path: impl Into<PathBuf>,
        entries: Map<String, Value>,
    ) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            entries,
        }
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }
}

/// A string literal passed to the lookup call at one source site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyUsage {
    pub key: String,
    pub context: SourceContext,
}
