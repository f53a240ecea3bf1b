//! Build environments the patch applier runs its side effects through.
//!
//! `SystemShell` really runs commands and touches files; `DryRun` only
//! prints what would happen. Tests plug in their own `BuildEnv`.

use std::{fmt, fs, path::Path, process::Command};

use anyhow::{Context, Result, bail};
use colored::Colorize;
use enum_dispatch::enum_dispatch;

/// An external command, run without a shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl ShellCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl AsRef<Path>) -> Self {
        self.args.push(arg.as_ref().to_string_lossy().to_string());
        self
    }
}

impl fmt::Display for ShellCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Side-effect primitives available to a build step.
#[enum_dispatch]
pub trait BuildEnv {
    /// Run `command`; a non-zero exit status is an error.
    fn execute(&mut self, command: &ShellCommand) -> Result<()>;

    /// Create an empty file at `path`, truncating any existing one.
    fn touch(&mut self, path: &Path) -> Result<()>;
}

#[enum_dispatch(BuildEnv)]
#[derive(Debug)]
pub enum Executor {
    SystemShell,
    DryRun,
}

impl Executor {
    pub fn new(dry_run: bool) -> Self {
        if dry_run {
            DryRun.into()
        } else {
            SystemShell.into()
        }
    }
}

#[derive(Debug, Default)]
pub struct SystemShell;

impl BuildEnv for SystemShell {
    fn execute(&mut self, command: &ShellCommand) -> Result<()> {
        let status = Command::new(&command.program)
            .args(&command.args)
            .status()
            .with_context(|| format!("Failed to run `{}`", command))?;

        if !status.success() {
            bail!("`{}` failed ({})", command, status);
        }
        Ok(())
    }

    fn touch(&mut self, path: &Path) -> Result<()> {
        fs::File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct DryRun;

impl BuildEnv for DryRun {
    fn execute(&mut self, command: &ShellCommand) -> Result<()> {
        println!("{} {}", "would run:".cyan(), command);
        Ok(())
    }

    fn touch(&mut self, path: &Path) -> Result<()> {
        println!("{} {}", "would create:".cyan(), path.display());
        Ok(())
    }
}
