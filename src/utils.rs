//! Common utility functions shared across the codebase.

use anyhow::{Context, Result};
use tokio::runtime::{Builder, Runtime};

/// Build the single-threaded runtime that drives audits and the MCP server.
///
/// Catalog reads are awaited one after another, so one thread is enough.
pub fn current_thread_runtime() -> Result<Runtime> {
    Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")
}
