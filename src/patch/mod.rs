//! One-shot patching of vendored dependencies.
//!
//! A patch is applied only when its sentinel file is absent, and the sentinel
//! is created once the `patch` command succeeds, so repeated builds leave the
//! dependency alone.

pub mod env;

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};

use crate::config::PatchConfig;
pub use env::{BuildEnv, DryRun, Executor, ShellCommand, SystemShell};

/// A configured patch with every path resolved against the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchSpec {
    pub dependency_dir: PathBuf,
    /// File to patch.
    pub target: PathBuf,
    /// Unified diff to apply.
    pub patch: PathBuf,
    pub sentinel: PathBuf,
}

impl PatchSpec {
    pub fn resolve(root: &Path, config: &PatchConfig) -> Self {
        let dependency_dir = root.join(&config.dependency_dir);
        Self {
            target: dependency_dir.join(&config.target),
            patch: root.join(&config.patch),
            sentinel: dependency_dir.join(&config.sentinel),
            dependency_dir,
        }
    }

    pub fn is_applied(&self) -> bool {
        self.sentinel.exists()
    }

    pub fn command(&self) -> ShellCommand {
        ShellCommand::new("patch").arg(&self.target).arg(&self.patch)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchOutcome {
    /// Sentinel present; nothing was run.
    AlreadyApplied,
    Applied,
}

/// Apply `spec` through `env` unless its sentinel already exists.
///
/// # Errors
///
/// Fails before running anything if the target or the patch file is missing,
/// and propagates any failure of the patch command or of creating the
/// sentinel.
pub fn apply_patch<E: BuildEnv>(
    spec: &PatchSpec,
    env: &mut E,
    verbose: bool,
) -> Result<PatchOutcome> {
    if spec.is_applied() {
        return Ok(PatchOutcome::AlreadyApplied);
    }

    if !spec.target.is_file() {
        bail!("Patch target not found: {}", spec.target.display());
    }
    if !spec.patch.is_file() {
        bail!("Patch file not found: {}", spec.patch.display());
    }

    let command = spec.command();
    if verbose {
        println!("Origin {}", spec.target.display());
        println!("Patch {}", spec.patch.display());
        println!("{}", command);
    }

    env.execute(&command)?;
    env.touch(&spec.sentinel)?;

    Ok(PatchOutcome::Applied)
}
