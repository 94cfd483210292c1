use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use transcheck::cli::{Arguments, Command, ExitStatus};

fn main() -> ExitCode {
    let args = Arguments::parse();
    transcheck::logging::init(args.verbose());

    if let Some(Command::Serve(cmd)) = &args.command {
        if let Err(err) = transcheck::cli::run_serve(cmd) {
            eprintln!("{} {:#}", "error:".bold().red(), err);
            return ExitStatus::Error.into();
        }
        return ExitStatus::Success.into();
    }

    match transcheck::cli::run_cli(args) {
        Ok(status) => status.into(),
        Err(err) => {
            eprintln!("{} {:#}", "error:".bold().red(), err);
            ExitStatus::Error.into()
        }
    }
}
