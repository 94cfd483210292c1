use std::path::PathBuf;

use crate::core::AuditReport;

#[derive(Debug)]
pub enum CommandSummary {
    Audit(AuditSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct AuditSummary {
    pub report: AuditReport,
    pub locales_root: PathBuf,
}

#[derive(Debug)]
pub struct InitSummary {
    pub path: PathBuf,
}

/// Result of running transcheck commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    /// Number of problems that fail the command when `exit_on_errors` is set.
    pub error_count: usize,
    pub exit_on_errors: bool,
}

