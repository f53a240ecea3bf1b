use std::path::Path;

use anyhow::{Context, Result};

use super::super::args::PatchCommand;
use super::{CommandResult, CommandSummary, PatchSummary};
use crate::{
    config::load_config,
    patch::{Executor, PatchSpec, apply_patch},
};

pub fn patch(cmd: PatchCommand) -> Result<CommandResult> {
    let args = &cmd.args;
    let root = args.common.root.as_deref().unwrap_or_else(|| Path::new("."));
    let root_dir = std::path::absolute(root)
        .with_context(|| format!("Invalid root directory: {}", root.display()))?;

    let config = load_config(&root_dir)?.config;
    let mut env = Executor::new(args.dry_run);

    let mut results = Vec::new();
    for patch_config in &config.patches {
        let spec = PatchSpec::resolve(&root_dir, patch_config);
        let outcome = apply_patch(&spec, &mut env, args.common.verbose)?;
        results.push((spec, outcome));
    }

    Ok(CommandResult {
        summary: CommandSummary::Patch(PatchSummary {
            results,
            dry_run: args.dry_run,
        }),
        exit_on_issues: false,
    })
}
