use anyhow::Result;

use super::super::args::CheckCommand;
use super::{CheckSummary, CommandResult, CommandSummary};
use crate::{core::CheckContext, rules::untranslated::find_missing_translations};

pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let args = &cmd.args;
    let ctx = CheckContext::new(
        args.common.root.as_deref(),
        args.lang_root.as_deref(),
        args.common.verbose,
    )?;

    // Before loading: a malformed table aborts the run.
    if ctx.verbose {
        println!("Checking {}", ctx.root_dir.display());
    }

    // A missing table directory is a soft precondition failure: warn, scan nothing.
    if !ctx.has_lang_dir() {
        return Ok(CommandResult {
            summary: CommandSummary::Check(CheckSummary {
                lang_dir: ctx.lang_dir,
                lang_dir_missing: true,
                issues: Vec::new(),
                source_files_checked: 0,
                tables_checked: 0,
            }),
            exit_on_issues: args.strict,
        });
    }

    let (tables, scan_result) = ctx.load()?;
    let usages = ctx.collect_usages(&scan_result.files)?;
    let issues = find_missing_translations(&tables, &usages);

    Ok(CommandResult {
        summary: CommandSummary::Check(CheckSummary {
            lang_dir: ctx.lang_dir,
            lang_dir_missing: false,
            issues,
            source_files_checked: scan_result.files.len(),
            tables_checked: tables.len(),
        }),
        exit_on_issues: args.strict,
    })
}
