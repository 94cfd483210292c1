use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::core::{Auditor, CatalogLoader, LanguageSet};

pub const CONFIG_FILE_NAME: &str = ".transcheckrc.json";

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_locales_root", alias = "localesDir")]
    pub locales_root: String,
    #[serde(default = "default_base_language")]
    pub base_language: String,
    #[serde(default = "default_languages")]
    pub languages: Vec<String>,
    #[serde(default)]
    pub ignore_namespaces: Vec<String>,
}

fn default_locales_root() -> String {
    "./public/locales".to_string()
}

fn default_base_language() -> String {
    "es".to_string()
}

fn default_languages() -> Vec<String> {
    ["es", "en", "pt"].map(String::from).to_vec()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locales_root: default_locales_root(),
            base_language: default_base_language(),
            languages: default_languages(),
            ignore_namespaces: Vec::new(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error for invalid language codes, a base language missing
    /// from `languages`, or invalid glob patterns in `ignoreNamespaces`.
    pub fn validate(&self) -> Result<()> {
        self.language_set()?;
        self.ignore_patterns()?;
        Ok(())
    }

    pub fn language_set(&self) -> Result<LanguageSet> {
        LanguageSet::new(self.base_language.clone(), self.languages.clone())
    }

    pub fn ignore_patterns(&self) -> Result<Vec<Pattern>> {
        self.ignore_namespaces
            .iter()
            .map(|pattern| {
                Pattern::new(pattern).with_context(|| {
                    format!("Invalid glob pattern in 'ignoreNamespaces': \"{}\"", pattern)
                })
            })
            .collect()
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Path of the config file, `None` when defaults are used.
    pub path: Option<PathBuf>,
}

impl ConfigLoadResult {
    pub fn from_file(&self) -> bool {
        self.path.is_some()
    }
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                path: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}

/// Command-line values that take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub locales_root: Option<PathBuf>,
    pub base_language: Option<String>,
    pub languages: Option<Vec<String>>,
}

/// Fully resolved settings for an audit run.
///
/// The locales root is absolute or relative to the process working
/// directory; the auditor never computes it.
#[derive(Debug, Clone)]
pub struct AuditSettings {
    pub locales_root: PathBuf,
    pub languages: LanguageSet,
    pub ignore_namespaces: Vec<Pattern>,
    pub config: Config,
    pub config_path: Option<PathBuf>,
}

impl AuditSettings {
    /// Load the config found from `start_dir` and apply overrides.
    pub fn load(start_dir: &Path, overrides: ConfigOverrides) -> Result<Self> {
        Self::resolve(load_config(start_dir)?, start_dir, overrides)
    }

    /// Resolve settings from a loaded config.
    ///
    /// A relative `localesRoot` from the file is taken relative to the file's
    /// directory; a relative override or default relative to `start_dir`.
    pub fn resolve(
        loaded: ConfigLoadResult,
        start_dir: &Path,
        overrides: ConfigOverrides,
    ) -> Result<Self> {
        let ConfigLoadResult { mut config, path } = loaded;

        if let Some(base) = overrides.base_language {
            config.base_language = base;
        }
        if let Some(languages) = overrides.languages {
            config.languages = languages;
        }
        config.validate()?;

        let locales_root = match overrides.locales_root {
            Some(root) => start_dir.join(root),
            None => {
                let config_dir = path
                    .as_deref()
                    .and_then(Path::parent)
                    .unwrap_or(start_dir);
                config_dir.join(&config.locales_root)
            }
        };

        Ok(Self {
            locales_root,
            languages: config.language_set()?,
            ignore_namespaces: config.ignore_patterns()?,
            config,
            config_path: path,
        })
    }

    pub fn auditor(&self) -> Auditor {
        Auditor::new(
            CatalogLoader::new(&self.locales_root),
            self.languages.clone(),
        )
        .with_ignored_namespaces(self.ignore_namespaces.clone())
    }
}
