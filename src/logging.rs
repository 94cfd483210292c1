//! Diagnostic logging on stderr.
//!
//! Stdout carries the audit report and, in `serve` mode, the MCP transport,
//! so log output must never go there.

use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

/// Environment variable holding a filter directive, e.g. `debug` or
/// `transcheck=trace`.
pub const LOG_ENV: &str = "TRANSCHECK_LOG";

/// Filter directive used when `LOG_ENV` is unset.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose { "transcheck=debug" } else { "warn" }
}

/// Install the global subscriber. Safe to call more than once.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .try_init()
        .ok();
}
