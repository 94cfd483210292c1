//! Command-line interface layer.

use std::env;

use anyhow::{Context, Result};

pub mod args;
mod commands;
mod exit_status;
mod report;
mod run;

pub use args::{Arguments, Command, CommonArgs, ServeCommand};
pub use exit_status::ExitStatus;

use crate::config::AuditSettings;
use commands::CommandResult;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let verbose = args.verbose();

    let Some(command) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    let result = run::run(command)?;
    report::print(&result, verbose);

    Ok(exit_status_from_result(&result))
}

fn exit_status_from_result(result: &CommandResult) -> ExitStatus {
    if result.exit_on_errors && result.error_count > 0 {
        ExitStatus::Failure
    } else {
        ExitStatus::Success
    }
}

/// Resolve settings from the working directory and run the MCP server on stdio.
pub fn run_serve(cmd: &ServeCommand) -> Result<()> {
    let cwd = env::current_dir().context("Failed to determine the current directory")?;
    let settings = AuditSettings::load(&cwd, cmd.common.overrides())?;
    crate::mcp::run_server(settings)
}
