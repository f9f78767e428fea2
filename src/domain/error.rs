use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for installer operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Installer config file could not be parsed.
    #[error("TOML parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// The license key could not be decrypted, or decrypted to an invalid license.
    #[error("Unable to decrypt license key.")]
    LicenseInvalid,

    /// The install path exists and is not a directory.
    #[error("Installation path is not a directory: {}", .0.display())]
    PathInvalid(PathBuf),

    /// The chosen database does not exist or is unreachable.
    #[error("A database with the name \"{0}\" does not exist.")]
    DatabaseNotFound(String),

    /// An external command could not be run to successful completion.
    #[error("Command '{command}' failed: {failure}")]
    ProcessFailed { command: String, failure: ProcessFailure },

    /// The scaffolded dependency manifest is not usable.
    #[error("Invalid manifest {}: {details}", .path.display())]
    ManifestInvalid { path: PathBuf, details: String },

    /// The generated environment file is missing.
    #[error("Environment file not found: {}", .0.display())]
    EnvironmentFileMissing(PathBuf),

    /// Feature name from the license payload is not a valid package segment.
    #[error("Invalid feature name '{0}': use lowercase letters, digits, '-', '_' or '.'")]
    InvalidFeatureName(String),

    /// Interactive prompt failed.
    #[error("Prompt failed: {0}")]
    Prompt(String),
}

/// Why an external command did not succeed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProcessFailure {
    /// The program could not be started.
    #[error("could not start: {0}")]
    Spawn(String),

    /// The program ran past its deadline and was killed.
    #[error("timed out after {0}s")]
    TimedOut(u64),

    /// The program exited unsuccessfully.
    #[error("exited with {}", describe_exit(.0))]
    ExitStatus(Option<i32>),
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {code}"),
        None => "a signal".to_string(),
    }
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub(crate) fn process_failed(command: impl Into<String>, failure: ProcessFailure) -> Self {
        AppError::ProcessFailed { command: command.into(), failure }
    }
}
