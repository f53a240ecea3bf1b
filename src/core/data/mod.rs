//! Core data types shared by the checker phases.
//!
//! ## Module Structure
//!
//! - `source`: Source code location types (SourceContext, SourceLocation)
//! - `table`: Translation table types (TranslationTable, KeyUsage)

pub mod source;
pub mod table;

pub use source::{SourceContext, SourceLocation};
pub use table::{KeyUsage, TranslationTable};
