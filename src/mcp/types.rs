use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

// ============================================================
// Audit Types (audit_translations)
// ============================================================

/// Parameters of audit_translations
#[derive(Debug, Default, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuditTranslationsParams {
    /// Audit only this namespace (e.g. "common" or "common.json"). Omit to audit all.
    #[serde(default)]
    pub namespace: Option<String>,
}

// ============================================================
// Config Types (get_config)
// ============================================================

/// Configuration DTO for MCP
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigDto {
    /// True if config was loaded from a file, false if using defaults
    pub from_file: bool,
    /// Path of the config file, if any
    pub config_path: Option<String>,
    /// Locales root after resolving relative paths
    pub resolved_locales_root: String,
    pub config: ConfigValues,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigValues {
    pub locales_root: String,
    pub base_language: String,
    pub languages: Vec<String>,
    pub ignore_namespaces: Vec<String>,
}

impl From<crate::config::Config> for ConfigValues {
    fn from(c: crate::config::Config) -> Self {
        Self {
            locales_root: c.locales_root,
            base_language: c.base_language,
            languages: c.languages,
            ignore_namespaces: c.ignore_namespaces,
        }
    }
}
