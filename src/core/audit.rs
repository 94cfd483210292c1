//! The differ: compares every target language against the base language,
//! namespace by namespace, and builds an [`AuditReport`].
//!
//! Loads are awaited one at a time. A run owns its report, so overlapping
//! runs never share state.

use glob::Pattern;
use tracing::{debug, warn};

use super::{
    catalog::{CatalogLoader, normalize_namespace, validate_namespace},
    error::{AuditError, CatalogError},
    flatten::{FlatCatalog, flatten_catalog},
    languages::LanguageSet,
    report::{AuditReport, Finding, MissingKey, NamespaceReport},
};

pub struct Auditor {
    loader: CatalogLoader,
    languages: LanguageSet,
    ignore_namespaces: Vec<Pattern>,
}

impl Auditor {
    pub fn new(loader: CatalogLoader, languages: LanguageSet) -> Self {
        Self {
            loader,
            languages,
            ignore_namespaces: Vec::new(),
        }
    }

    /// Skip discovered namespaces matching any of these patterns.
    ///
    /// Explicitly requested namespaces are always audited.
    pub fn with_ignored_namespaces(mut self, patterns: Vec<Pattern>) -> Self {
        self.ignore_namespaces = patterns;
        self
    }

    pub fn loader(&self) -> &CatalogLoader {
        &self.loader
    }

    pub fn languages(&self) -> &LanguageSet {
        &self.languages
    }

    /// Audit one namespace, or every namespace of the base language.
    ///
    /// Fails only when the locales root is missing, the namespace name is
    /// invalid, or the base language directory cannot be listed. Everything
    /// else becomes a finding in the returned report.
    pub async fn run(&self, namespace: Option<&str>) -> Result<AuditReport, AuditError> {
        let root = self.loader.root();
        if !tokio::fs::metadata(root)
            .await
            .map(|meta| meta.is_dir())
            .unwrap_or(false)
        {
            return Err(AuditError::LocalesRootMissing {
                path: root.to_path_buf(),
            });
        }

        let namespaces = self.resolve_namespaces(namespace).await?;
        debug!(count = namespaces.len(), "resolved namespaces");

        let targets: Vec<String> = self.languages.targets().map(String::from).collect();
        let mut report = AuditReport::new(self.languages.base(), targets);

        for namespace in &namespaces {
            report.push(self.audit_namespace(namespace).await);
        }

        debug!(
            total_missing = report.total_missing,
            namespaces = report.namespaces.len(),
            "audit finished"
        );
        Ok(report)
    }

    async fn resolve_namespaces(&self, namespace: Option<&str>) -> Result<Vec<String>, AuditError> {
        if let Some(namespace) = namespace {
            validate_namespace(namespace)?;
            return Ok(vec![normalize_namespace(namespace).to_string()]);
        }

        let discovered = self
            .loader
            .discover_namespaces(self.languages.base())
            .await?;

        Ok(discovered
            .into_iter()
            .filter(|ns| {
                let ignored = self.ignore_namespaces.iter().any(|p| p.matches(ns));
                if ignored {
                    debug!(namespace = %ns, "namespace ignored by config");
                }
                !ignored
            })
            .collect())
    }

    /// Diff one namespace against every target language.
    pub async fn audit_namespace(&self, namespace: &str) -> NamespaceReport {
        let base_language = self.languages.base();
        let mut result = NamespaceReport::new(namespace);

        let base_keys = match self.load_flat(base_language, namespace).await {
            Ok(keys) => keys,
            Err(err) => {
                warn!(namespace, language = base_language, error = %err, "base catalog unavailable");
                result.findings.push(Finding::BaseUnavailable {
                    language: base_language.to_string(),
                    reason: err.to_string(),
                });
                return result;
            }
        };
        result.base_key_count = base_keys.len();

        for language in self.languages.targets() {
            debug!(namespace, language, "checking catalog");

            let target_keys = match self.load_flat(language, namespace).await {
                Ok(keys) => keys,
                Err(err) => {
                    if err.is_parse_failure() {
                        warn!(namespace, language, error = %err, "unusable catalog counted as missing");
                    } else {
                        debug!(namespace, language, error = %err, "catalog missing");
                    }
                    result.findings.push(Finding::MissingFile {
                        language: language.to_string(),
                        key_count: base_keys.len(),
                    });
                    continue;
                }
            };

            let missing = missing_keys(&base_keys, &target_keys);
            if !missing.is_empty() {
                result.findings.push(Finding::MissingKeys {
                    language: language.to_string(),
                    keys: missing,
                });
            }
        }

        result
    }

    async fn load_flat(&self, language: &str, namespace: &str) -> Result<FlatCatalog, CatalogError> {
        let catalog = self.loader.load(language, namespace).await?;
        Ok(flatten_catalog(&catalog))
    }
}

/// Keys of `base` absent from `target`, in base order.
///
/// Extra keys in `target` are never reported.
pub fn missing_keys(base: &FlatCatalog, target: &FlatCatalog) -> Vec<MissingKey> {
    base.iter()
        .filter(|(path, _)| !target.contains_key(path.as_str()))
        .map(|(path, value)| MissingKey::new(path.clone(), value))
        .collect()
}
