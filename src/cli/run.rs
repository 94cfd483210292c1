use anyhow::Result;

use super::{
    args::Command,
    commands::{CommandResult, audit::audit, init::init},
};

/// Dispatches a parsed command to its handler.
///
/// # Returns
/// - `Ok(CommandResult)` with the command's summary and error count
/// - `Err` if the command could not run (config errors, missing locales root, ...)
pub fn run(command: Command) -> Result<CommandResult> {
    match command {
        Command::Audit(cmd) => audit(cmd),
        Command::Init => init(),
        Command::Serve(_) => {
            // Serve command is handled in main.rs before calling run()
            anyhow::bail!("Serve command should be handled before run()")
        }
    }
}
