use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// - `Success` (0): Command completed; an audit that found missing keys still
///   succeeds unless `--strict` was given
/// - `Error` (1): Command could not run (missing locales root, bad config, etc.)
/// - `Failure` (2): `audit --strict` found missing keys or unreadable base catalogs
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Command completed successfully.
    Success,
    /// Command failed due to internal error (config error, unreadable locales root, etc.).
    Error,
    /// Strict audit completed but found issues.
    Failure,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Error => ExitCode::from(1),
            ExitStatus::Failure => ExitCode::from(2),
        }
    }
}
