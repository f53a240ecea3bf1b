//! Detection rules run over extracted usages.

pub mod untranslated;
