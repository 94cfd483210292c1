use anyhow::{Result, bail};

/// The configured languages of an audit run, with one fixed base language.
///
/// The base language defines completeness; every other language is a target
/// checked against it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageSet {
    base: String,
    languages: Vec<String>,
}

impl LanguageSet {
    /// Build a language set, validating every code.
    ///
    /// The base language must appear in `languages`. Duplicate codes are
    /// rejected.
    pub fn new(base: impl Into<String>, languages: Vec<String>) -> Result<Self> {
        let base = base.into();
        validate_language_code(&base)?;
        if !languages.contains(&base) {
            bail!(
                "Base language '{}' must be listed in 'languages' ({})",
                base,
                languages.join(", ")
            );
        }

        let mut seen = Vec::with_capacity(languages.len() + 1);
        for code in &languages {
            validate_language_code(code)?;
            if seen.contains(code) {
                bail!("Language '{}' is listed more than once", code);
            }
            seen.push(code.clone());
        }

        Ok(Self {
            base,
            languages: seen,
        })
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// All configured languages, base included, in configuration order.
    pub fn all(&self) -> &[String] {
        &self.languages
    }

    /// Configured languages minus the base, in configuration order.
    pub fn targets(&self) -> impl Iterator<Item = &str> {
        self.languages
            .iter()
            .map(String::as_str)
            .filter(move |code| *code != self.base)
    }
}

/// Validate a language code before it is used as a directory name.
///
/// Only letters, digits, hyphens and underscores are allowed, which keeps the
/// code from escaping the locales root.
pub fn validate_language_code(code: &str) -> Result<()> {
    if code.is_empty() {
        bail!("Language code cannot be empty");
    }
    if !code
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        bail!(
            "Language code '{}' can only contain letters, numbers, hyphens, and underscores",
            code
        );
    }
    Ok(())
}
