//! Esper helper - build-time tooling for the Esper firmware.
//!
//! Two independent helpers behind one CLI:
//! - a localization checker that reports `localized_string("...")` keys
//!   missing from any `.lang` translation table;
//! - a patch applier that patches a vendored dependency once, remembering
//!   completion with a sentinel file.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, commands, reporting)
//! - `config`: Configuration file loading and parsing
//! - `core`: Table loading, source scanning and usage extraction
//! - `issues`: Issue type definitions
//! - `patch`: Sentinel-guarded patch application
//! - `rules`: Detection rules run over extracted usages

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod patch;
pub mod rules;
