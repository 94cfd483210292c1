//! Model Context Protocol (MCP) server implementation.
//!
//! Exposes the translation audit to AI assistants as MCP tools over stdio.
//!
//! ## Module Structure
//!
//! - `server`: Main MCP server implementation
//! - `types`: Tool parameter and result types

mod server;
pub mod types;

pub use server::{TranscheckMcpServer, run_server};
