//! Core analysis for the localization check.
//!
//! 1. `parsers::lang` loads every translation table
//! 2. `file_scanner` walks the tree for source files
//! 3. `extract` pulls lookup-call keys out of each file
//!
//! `CheckContext` wires the three together; comparison lives in `rules`.

pub mod context;
pub mod data;
pub mod extract;
pub mod file_scanner;
pub mod parsers;

pub use context::CheckContext;
pub use data::{KeyUsage, SourceContext, SourceLocation, TranslationTable};
