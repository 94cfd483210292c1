use std::env;

use anyhow::{Context, Result};
use tracing::debug;

use super::{AuditSummary, CommandResult, CommandSummary};
use crate::{cli::args::AuditCommand, config::AuditSettings, utils::current_thread_runtime};

pub fn audit(cmd: AuditCommand) -> Result<CommandResult> {
    let cwd = env::current_dir().context("Failed to determine the current directory")?;
    let settings = AuditSettings::load(&cwd, cmd.common.overrides())?;
    debug!(
        locales_root = %settings.locales_root.display(),
        base = settings.languages.base(),
        "starting audit"
    );

    let auditor = settings.auditor();
    let report = current_thread_runtime()?.block_on(auditor.run(cmd.namespace.as_deref()))?;

    Ok(CommandResult {
        error_count: report.total_missing + report.namespace_error_count(),
        exit_on_errors: cmd.strict,
        summary: CommandSummary::Audit(AuditSummary {
            report,
            locales_root: settings.locales_root,
        }),
    })
}
