use std::path::{Path, PathBuf};

use super::{AppError, LicenseKey};

/// Everything the pipeline needs from the user, collected once.
#[derive(Debug, Clone)]
pub struct InstallRequest {
    pub license_key: LicenseKey,
    pub install_path: PathBuf,
    /// Present only in the interactive variant; enables environment setup and migrations.
    pub database_name: Option<String>,
}

impl InstallRequest {
    pub fn new(license_key: LicenseKey, install_path: PathBuf) -> Self {
        Self { license_key, install_path, database_name: None }
    }

    pub fn with_database(mut self, database_name: impl Into<String>) -> Self {
        self.database_name = Some(database_name.into());
        self
    }
}

/// Fail when the target exists and is not a directory.
pub fn validate_install_path(path: &Path) -> Result<(), AppError> {
    if path.as_os_str().is_empty() {
        return Err(AppError::config_error("Installation path must not be empty"));
    }
    if path.exists() && !path.is_dir() {
        return Err(AppError::PathInvalid(path.to_path_buf()));
    }
    Ok(())
}

/// Database names are interpolated into a client query, so only plain identifiers pass.
pub fn is_plain_database_name(name: &str) -> bool {
    !name.is_empty()
        && name.len() <= 64
        && name.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '$' | '-'))
}
