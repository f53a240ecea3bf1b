//! Report formatting and printing utilities.
//!
//! Warnings go to stderr, confirmations to stdout. Kept apart from the check
//! logic so the library can be used without any terminal output.

use std::io::{self, Write};

use colored::{ColoredString, Colorize};
use unicode_width::UnicodeWidthStr;

use super::commands::{CheckSummary, CommandResult, CommandSummary, InitSummary, PatchSummary};
use crate::issues::MissingTranslationIssue;
use crate::patch::PatchOutcome;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// ANSI 208, the warning colour.
fn orange(text: &str) -> ColoredString {
    text.truecolor(255, 135, 0)
}

pub fn print(result: &CommandResult, verbose: bool) {
    match &result.summary {
        CommandSummary::Check(summary) => print_check(summary, verbose),
        CommandSummary::Patch(summary) => print_patch(summary, verbose),
        CommandSummary::Init(summary) => print_init(summary),
    }
}

// ============================================================
// Check
// ============================================================

fn print_check(summary: &CheckSummary, verbose: bool) {
    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();

    if summary.lang_dir_missing {
        print_lang_dir_missing_to(summary, &mut stderr);
        return;
    }

    for issue in &summary.issues {
        print_missing_translation_to(issue, verbose, &mut stderr);
    }

    if summary.issues.is_empty() {
        print_success_to(&mut stdout);
    }

    if verbose {
        print_check_stats_to(summary, &mut stdout);
    }
}

/// Print the soft warning for an absent translation directory.
pub fn print_lang_dir_missing_to<W: Write>(summary: &CheckSummary, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{}",
        orange(&format!(
            "Warning: Language directory not found: {}",
            summary.lang_dir.display()
        ))
    );
}

/// Print one untranslated-string warning.
///
/// In verbose mode the source line follows, with a caret under the call.
pub fn print_missing_translation_to<W: Write>(
    issue: &MissingTranslationIssue,
    verbose: bool,
    writer: &mut W,
) {
    let _ = writeln!(
        writer,
        "{}{}{}",
        orange("Warning: Untranslated string "),
        format!("'{}'", issue.key).white(),
        orange(&format!(
            " missing in {}, first usage in {}:{}",
            issue.table_path.display(),
            issue.context.file_path(),
            issue.context.line()
        ))
    );

    if verbose {
        print_source_excerpt_to(issue, writer);
    }
}

fn print_source_excerpt_to<W: Write>(issue: &MissingTranslationIssue, writer: &mut W) {
    let ctx = &issue.context;
    let line = ctx.line().to_string();
    let width = line.len();

    let _ = writeln!(writer, "{:>width$} {}", "", "|".blue(), width = width);
    let _ = writeln!(
        writer,
        "{} {} {}",
        line.blue(),
        "|".blue(),
        ctx.source_line
    );

    // Caret under the call token (col is 1-based)
    let prefix: String = ctx
        .source_line
        .chars()
        .take(ctx.col().saturating_sub(1))
        .collect();
    let padding = UnicodeWidthStr::width(prefix.as_str());
    let _ = writeln!(
        writer,
        "{:>width$} {} {:>padding$}{}",
        "",
        "|".blue(),
        "",
        "^".yellow(),
        width = width,
        padding = padding
    );
}

/// Print the confirmation for a clean run.
pub fn print_success_to<W: Write>(writer: &mut W) {
    let _ = writeln!(writer, "{}", "No untranslated strings detected".green());
}

fn print_check_stats_to<W: Write>(summary: &CheckSummary, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} untranslated string(s) across {} table(s), {} source file(s) checked",
        summary.issues.len(),
        summary.tables_checked,
        summary.source_files_checked
    );
}

// ============================================================
// Patch
// ============================================================

fn print_patch(summary: &PatchSummary, verbose: bool) {
    for (spec, outcome) in &summary.results {
        match outcome {
            PatchOutcome::AlreadyApplied => {
                if verbose {
                    println!(
                        "Skipping {}: already patched",
                        spec.dependency_dir.display()
                    );
                }
            }
            PatchOutcome::Applied if summary.dry_run => {}
            PatchOutcome::Applied => {
                println!(
                    "{} {}",
                    SUCCESS_MARK.green(),
                    format!(
                        "Applied {} to {}",
                        spec.patch.display(),
                        spec.target.display()
                    )
                    .green()
                );
            }
        }
    }
}

// ============================================================
// Init
// ============================================================

fn print_init(summary: &InitSummary) {
    println!(
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Created {}", summary.path.display()).green()
    );
}
