//! Printing of command results.
//!
//! The audit report text is written to stdout exactly as rendered by
//! [`AuditReport`]'s `Display`, so it matches what the MCP tool returns.
//! Decorations such as the locales root line go to stderr.

use std::io::{self, Write};

use colored::Colorize;

use super::commands::{AuditSummary, CommandResult, CommandSummary, InitSummary};
use crate::config::CONFIG_FILE_NAME;
use crate::core::{AuditReport, report::SUCCESS_MARK};

pub fn print(result: &CommandResult, verbose: bool) {
    match &result.summary {
        CommandSummary::Audit(summary) => print_audit(summary, verbose),
        CommandSummary::Init(summary) => print_init(summary),
    }
}

fn print_audit(summary: &AuditSummary, verbose: bool) {
    if verbose {
        let _ = writeln!(
            io::stderr().lock(),
            "{} {}",
            "locales root:".dimmed(),
            summary.locales_root.display()
        );
    }
    print_report_to(&summary.report, &mut io::stdout().lock());
}

/// Write the report text followed by a newline.
pub fn print_report_to<W: Write>(report: &AuditReport, writer: &mut W) {
    let _ = writeln!(writer, "{}", report);
}

fn print_init(summary: &InitSummary) {
    print_init_to(summary, &mut io::stdout().lock());
}

fn print_init_to<W: Write>(summary: &InitSummary, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Created {}", CONFIG_FILE_NAME).green()
    );
    let _ = writeln!(writer, "  {}", summary.path.display().to_string().dimmed());
}
