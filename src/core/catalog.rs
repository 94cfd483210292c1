//! Catalog loading from the locales root.
//!
//! Layout: `<root>/<language>/<namespace>.json`, one JSON object per file.

use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use serde_json::{Map, Value};

use super::error::{AuditError, CatalogError};

pub const CATALOG_EXTENSION: &str = "json";

/// A parsed catalog root.
pub type Catalog = Map<String, Value>;

/// Reads catalogs below an explicit locales root. Never writes.
#[derive(Debug, Clone)]
pub struct CatalogLoader {
    root: PathBuf,
}

impl CatalogLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn language_dir(&self, language: &str) -> PathBuf {
        self.root.join(language)
    }

    /// Path of the catalog file for a language and an already-normalized namespace.
    pub fn catalog_path(&self, language: &str, namespace: &str) -> PathBuf {
        self.language_dir(language)
            .join(format!("{}.{}", namespace, CATALOG_EXTENSION))
    }

    /// Load and parse one catalog. `namespace` must already be normalized.
    pub async fn load(&self, language: &str, namespace: &str) -> Result<Catalog, CatalogError> {
        let path = self.catalog_path(language, namespace);

        let content = match tokio::fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Err(CatalogError::NotFound { path });
            }
            Err(source) => return Err(CatalogError::Io { path, source }),
        };

        let value: Value = match serde_json::from_str(&content) {
            Ok(value) => value,
            Err(source) => return Err(CatalogError::Malformed { path, source }),
        };

        match value {
            Value::Object(map) => Ok(map),
            _ => Err(CatalogError::NotAnObject { path }),
        }
    }

    /// List the namespaces present for a language, sorted by name.
    ///
    /// Only `*.json` files count, symlinks resolved; subdirectories and other
    /// files are ignored. An entry whose target cannot be read is kept so the
    /// audit reports it instead of skipping it.
    pub async fn discover_namespaces(&self, language: &str) -> Result<Vec<String>, AuditError> {
        let dir = self.language_dir(language);
        let discovery_error = |source| AuditError::NamespaceDiscovery {
            path: dir.clone(),
            source,
        };

        let mut entries = tokio::fs::read_dir(&dir).await.map_err(discovery_error)?;
        let mut namespaces = Vec::new();

        while let Some(entry) = entries.next_entry().await.map_err(discovery_error)? {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some(CATALOG_EXTENSION) {
                continue;
            }
            if let Ok(meta) = tokio::fs::metadata(&path).await
                && !meta.is_file()
            {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                namespaces.push(stem.to_string());
            }
        }

        namespaces.sort();
        Ok(namespaces)
    }
}

/// Strip one redundant `.json` suffix from a namespace name.
pub fn normalize_namespace(namespace: &str) -> &str {
    namespace
        .strip_suffix(".json")
        .filter(|stem| !stem.is_empty())
        .unwrap_or(namespace)
}

/// Validate a namespace name before it is joined onto a filesystem path.
///
/// Allowed: letters, digits, `-`, `_` and `.`; no leading dot and no `..`.
pub fn validate_namespace(namespace: &str) -> Result<(), AuditError> {
    let invalid = |reason: &str| AuditError::InvalidNamespace {
        name: namespace.to_string(),
        reason: reason.to_string(),
    };

    if namespace.is_empty() {
        return Err(invalid("namespace cannot be empty"));
    }
    if namespace.starts_with('.') {
        return Err(invalid("namespace cannot start with '.'"));
    }
    if namespace.contains("..") {
        return Err(invalid("namespace cannot contain '..'"));
    }
    if !namespace
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '_' || c == '-')
    {
        return Err(invalid(
            "namespace can only contain letters, numbers, dots, underscores, and hyphens",
        ));
    }
    Ok(())
}
