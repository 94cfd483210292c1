//! Error types for catalog loading and audit runs.
//!
//! `CatalogError` is always recovered inside the audit loop and turned into a
//! report finding. `AuditError` is the only kind that aborts a whole run.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Failure to load a single (language, namespace) catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog file '{}' does not exist", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read catalog file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse catalog file '{}': {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("catalog file '{}' must contain a JSON object at the top level", path.display())]
    NotAnObject { path: PathBuf },
}

impl CatalogError {
    /// True when the file exists but its content could not be used.
    pub fn is_parse_failure(&self) -> bool {
        matches!(self, Self::Malformed { .. } | Self::NotAnObject { .. })
    }

    pub fn path(&self) -> &PathBuf {
        match self {
            Self::NotFound { path }
            | Self::Io { path, .. }
            | Self::Malformed { path, .. }
            | Self::NotAnObject { path } => path,
        }
    }
}

/// Failure that prevents an audit run from producing a report.
#[derive(Debug, Error)]
pub enum AuditError {
    #[error(
        "locales root '{}' does not exist or is not a directory.\n\
         Hint: check 'localesRoot' in .transcheckrc.json or pass --locales-root.",
        path.display()
    )]
    LocalesRootMissing { path: PathBuf },

    #[error("failed to list namespaces in '{}': {source}", path.display())]
    NamespaceDiscovery {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid namespace '{name}': {reason}")]
    InvalidNamespace { name: String, reason: String },
}
