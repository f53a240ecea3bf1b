use std::path::PathBuf;

use super::super::exit_status::ExitStatus;
use crate::{
    issues::MissingTranslationIssue,
    patch::{PatchOutcome, PatchSpec},
};

#[derive(Debug)]
pub enum CommandSummary {
    Check(CheckSummary),
    Patch(PatchSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct CheckSummary {
    pub lang_dir: PathBuf,
    /// The translation directory was absent; nothing was scanned.
    pub lang_dir_missing: bool,
    pub issues: Vec<MissingTranslationIssue>,
    pub source_files_checked: usize,
    pub tables_checked: usize,
}

#[derive(Debug)]
pub struct PatchSummary {
    pub results: Vec<(PatchSpec, PatchOutcome)>,
    pub dry_run: bool,
}

#[derive(Debug)]
pub struct InitSummary {
    pub path: PathBuf,
}

/// Result of running a command, handed to the reporter.
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    /// If true, findings turn into exit status 1.
    pub exit_on_issues: bool,
}

impl CommandResult {
    pub fn issue_count(&self) -> usize {
        match &self.summary {
            CommandSummary::Check(summary) => summary.issues.len(),
            CommandSummary::Patch(_) | CommandSummary::Init(_) => 0,
        }
    }

    pub fn exit_status(&self) -> ExitStatus {
        if self.exit_on_issues && self.issue_count() > 0 {
            ExitStatus::Failure
        } else {
            ExitStatus::Success
        }
    }
}
