//! Transcheck - translation catalog completeness auditor
//!
//! Transcheck compares a base-language translation catalog against every other
//! configured language, namespace by namespace, and reports the keys each
//! language is missing. It runs as a CLI (`transcheck audit`) or as an MCP
//! server (`transcheck serve`) exposing the same audit as a tool.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and settings resolution
//! - `core`: Catalog loading, flattening, diffing and report rendering
//! - `logging`: Diagnostic logging setup (stderr only)
//! - `mcp`: Model Context Protocol server implementation
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod logging;
pub mod mcp;
pub mod utils;
