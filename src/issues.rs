//! Issue types for localization check results.
//!
//! Each issue is self-contained with everything the reporter needs to print
//! it without going back to the tables or source files.

use std::path::PathBuf;

use crate::core::SourceContext;

/// A used key that one translation table does not define.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingTranslationIssue {
    /// The untranslated key, verbatim from the source literal.
    pub key: String,
    /// Table lacking the key.
    pub table_path: PathBuf,
    /// First usage of the key seen during the scan.
    pub context: SourceContext,
}
