//! Untranslated string detection rule.
//!
//! Detects keys passed to the lookup call that are absent from one or more
//! translation tables. Each (key, table) pair is reported once per run, at
//! the first usage encountered in scan order.

use std::collections::{HashMap, HashSet};

use crate::{
    core::{KeyUsage, TranslationTable},
    issues::MissingTranslationIssue,
};

/// Compare `usages` against every table.
///
/// `usages` must be in scan order; the location attached to an issue is the
/// first usage of its key. Tables are checked in the order given.
pub fn find_missing_translations<'a>(
    tables: &[TranslationTable],
    usages: impl IntoIterator<Item = &'a KeyUsage>,
) -> Vec<MissingTranslationIssue> {
    // key -> names of tables already reported as missing it
    let mut reported: HashMap<&str, HashSet<&str>> = HashMap::new();
    let mut issues = Vec::new();

    for usage in usages {
        for table in tables {
            if table.contains_key(&usage.key) {
                continue;
            }

            let seen = reported.entry(usage.key.as_str()).or_default();
            if !seen.insert(table.name.as_str()) {
                continue;
            }

            issues.push(MissingTranslationIssue {
                key: usage.key.clone(),
                table_path: table.path.clone(),
                context: usage.context.clone(),
            });
        }
    }

    issues
}
