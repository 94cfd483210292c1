//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `audit`: Report translation keys missing from non-base languages
//! - `init`: Initialize a transcheck configuration file
//! - `serve`: Start MCP server for AI integration
//!
//! `transcheck --audit` is shorthand for `transcheck audit` and takes the same
//! options.

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::config::ConfigOverrides;

/// Environment variable read for `--locales-root`.
pub const LOCALES_ROOT_ENV: &str = "TRANSCHECK_LOCALES_ROOT";

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None, args_conflicts_with_subcommands = true)]
pub struct Arguments {
    /// Run a full audit with the configured settings (same as `audit`)
    #[arg(long)]
    pub audit: bool,

    #[command(flatten, next_help_heading = "Options for --audit")]
    pub audit_options: AuditCommand,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Resolve `--audit` into the `audit` command. Prints help and returns
    /// `None` when nothing was requested.
    pub fn with_command_or_help(self) -> Option<Command> {
        match self.command {
            Some(command) => Some(command),
            None if self.audit => Some(Command::Audit(self.audit_options)),
            None => {
                Self::command().print_help().ok();
                None
            }
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Audit(cmd)) => cmd.common.verbose,
            Some(Command::Serve(cmd)) => cmd.common.verbose,
            Some(Command::Init) => false,
            None => self.audit && self.audit_options.common.verbose,
        }
    }
}

/// Common arguments shared by `audit` and `serve`.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Locales root directory (overrides config file)
    #[arg(long, env = LOCALES_ROOT_ENV)]
    pub locales_root: Option<PathBuf>,

    /// Base language every other language is checked against (overrides config file)
    #[arg(long)]
    pub base_language: Option<String>,

    /// Comma-separated list of languages to audit (overrides config file)
    #[arg(long, value_delimiter = ',')]
    pub languages: Option<Vec<String>>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl CommonArgs {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            locales_root: self.locales_root.clone(),
            base_language: self.base_language.clone(),
            languages: self.languages.clone(),
        }
    }
}

#[derive(Debug, Default, Args)]
pub struct AuditCommand {
    /// Audit a single namespace (with or without the .json extension)
    #[arg(short, long)]
    pub namespace: Option<String>,

    /// Exit with a failure status when missing keys are found
    #[arg(long)]
    pub strict: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Default, Args)]
pub struct ServeCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Report translation keys present in the base language but missing elsewhere
    Audit(AuditCommand),
    /// Initialize a new .transcheckrc.json configuration file
    Init,
    /// Start MCP server for AI coding agents
    Serve(ServeCommand),
}
