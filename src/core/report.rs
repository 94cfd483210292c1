//! Audit report model and its text rendering.
//!
//! The `Display` implementation is the single source of report text: the CLI
//! prints it and the MCP tool returns it, so both surfaces stay byte-identical.

use std::fmt;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Maximum number of characters of a base value shown in a preview.
pub const PREVIEW_MAX_CHARS: usize = 50;

const ELLIPSIS: &str = "...";

/// A base key absent from a target catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingKey {
    pub path: String,
    /// Truncated base-language value.
    pub preview: String,
}

impl MissingKey {
    pub fn new(path: impl Into<String>, base_value: &str) -> Self {
        Self {
            path: path.into(),
            preview: preview(base_value),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Finding {
    /// The base catalog of the namespace could not be loaded; nothing was diffed.
    BaseUnavailable { language: String, reason: String },
    /// The target catalog is absent or unusable; every base key is charged.
    MissingFile { language: String, key_count: usize },
    /// The target catalog lacks some base keys.
    MissingKeys {
        language: String,
        keys: Vec<MissingKey>,
    },
}

impl Finding {
    /// Number of missing keys this finding adds to the run total.
    pub fn missing_count(&self) -> usize {
        match self {
            Finding::BaseUnavailable { .. } => 0,
            Finding::MissingFile { key_count, .. } => *key_count,
            Finding::MissingKeys { keys, .. } => keys.len(),
        }
    }

    pub fn language(&self) -> &str {
        match self {
            Finding::BaseUnavailable { language, .. }
            | Finding::MissingFile { language, .. }
            | Finding::MissingKeys { language, .. } => language,
        }
    }
}

/// Findings of one namespace, in target-language order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceReport {
    pub namespace: String,
    pub base_key_count: usize,
    pub findings: Vec<Finding>,
}

impl NamespaceReport {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            base_key_count: 0,
            findings: Vec::new(),
        }
    }

    pub fn has_base_error(&self) -> bool {
        self.findings
            .iter()
            .any(|f| matches!(f, Finding::BaseUnavailable { .. }))
    }
}

/// Result of one audit run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditReport {
    pub base_language: String,
    pub target_languages: Vec<String>,
    pub namespaces: Vec<NamespaceReport>,
    pub total_missing: usize,
}

impl AuditReport {
    pub fn new(base_language: impl Into<String>, target_languages: Vec<String>) -> Self {
        Self {
            base_language: base_language.into(),
            target_languages,
            namespaces: Vec::new(),
            total_missing: 0,
        }
    }

    /// Add a namespace, charging its findings to the run total.
    pub fn push(&mut self, namespace: NamespaceReport) {
        self.total_missing += namespace
            .findings
            .iter()
            .map(Finding::missing_count)
            .sum::<usize>();
        self.namespaces.push(namespace);
    }

    /// True when every target has every base key and every base catalog loaded.
    pub fn is_clean(&self) -> bool {
        self.total_missing == 0 && !self.namespaces.iter().any(NamespaceReport::has_base_error)
    }

    pub fn namespace_error_count(&self) -> usize {
        self.namespaces
            .iter()
            .filter(|ns| ns.has_base_error())
            .count()
    }
}

impl fmt::Display for AuditReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_clean() {
            return write!(
                f,
                "{} All translations are complete ({} namespace{} checked, base: {}, targets: {})",
                SUCCESS_MARK,
                self.namespaces.len(),
                plural(self.namespaces.len()),
                self.base_language,
                self.target_languages.join(", ")
            );
        }

        writeln!(
            f,
            "Translation audit (base: {}, targets: {})",
            self.base_language,
            self.target_languages.join(", ")
        )?;

        for namespace in self.namespaces.iter().filter(|ns| !ns.findings.is_empty()) {
            writeln!(f)?;
            writeln!(f, "[{}]", namespace.namespace)?;
            for finding in &namespace.findings {
                write_finding(f, finding)?;
            }
        }

        writeln!(f)?;
        write!(f, "Total missing keys: {}", self.total_missing)?;

        let errors = self.namespace_error_count();
        if errors > 0 {
            write!(
                f,
                "\nNamespaces with errors: {} (base catalog could not be loaded)",
                errors
            )?;
        }
        Ok(())
    }
}

fn write_finding(f: &mut fmt::Formatter<'_>, finding: &Finding) -> fmt::Result {
    match finding {
        Finding::BaseUnavailable { language, reason } => writeln!(
            f,
            "  {} {}: base catalog unavailable, namespace skipped ({})",
            FAILURE_MARK, language, reason
        ),
        Finding::MissingFile {
            language,
            key_count,
        } => writeln!(
            f,
            "  {} {}: catalog file missing ({} key{} missing)",
            FAILURE_MARK,
            language,
            key_count,
            plural(*key_count)
        ),
        Finding::MissingKeys { language, keys } => {
            writeln!(
                f,
                "  {} {}: {} missing key{}",
                FAILURE_MARK,
                language,
                keys.len(),
                plural(keys.len())
            )?;
            for key in keys {
                writeln!(f, "      - {}: \"{}\"", key.path, key.preview)?;
            }
            Ok(())
        }
    }
}

fn plural(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}

/// Truncate a value to `PREVIEW_MAX_CHARS` characters, appending an ellipsis
/// when anything was cut.
pub fn preview(value: &str) -> String {
    match value.char_indices().nth(PREVIEW_MAX_CHARS) {
        Some((cut, _)) => format!("{}{}", &value[..cut], ELLIPSIS),
        None => value.to_string(),
    }
}
