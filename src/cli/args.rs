//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `check`: Report localized strings missing from translation tables
//! - `patch`: Apply configured patches to vendored dependencies, once
//! - `init`: Initialize the configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Check(cmd)) => cmd.args.common.verbose,
            Some(Command::Patch(cmd)) => cmd.args.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Project root directory (defaults to the current directory)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Parser)]
pub struct CheckArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Translation table directory, relative to the root (overrides config file)
    #[arg(long)]
    pub lang_root: Option<PathBuf>,

    /// Exit with status 1 when untranslated strings are found
    #[arg(long)]
    pub strict: bool,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub args: CheckArgs,
}

#[derive(Debug, Parser)]
pub struct PatchArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Print the commands instead of running them
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Debug, Args)]
pub struct PatchCommand {
    #[command(flatten)]
    pub args: PatchArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check that every localized string is present in every translation table
    Check(CheckCommand),
    /// Apply dependency patches that have not been applied yet
    Patch(PatchCommand),
    /// Initialize a new .esperrc.json configuration file
    Init,
}
