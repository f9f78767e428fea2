use std::path::Path;
use std::process::Command;

use crate::domain::config::LicenseConfig;
use crate::domain::{AppError, LicensePayload, ProcessFailure};
use crate::ports::LicenseService;

/// License service backed by an external decoder program.
///
/// The decoder is invoked as `<program> <args...> <license-file>` and is expected to print
/// a JSON payload `{"valid": bool, "features": [..]}` on success.
#[derive(Debug, Clone)]
pub struct CommandLicenseService {
    program: String,
    args: Vec<String>,
}

impl CommandLicenseService {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self { program: program.into(), args }
    }

    pub fn from_config(config: &LicenseConfig) -> Self {
        Self::new(config.program.clone(), config.args.clone())
    }
}

impl LicenseService for CommandLicenseService {
    fn license_data(&self, license_file: &Path) -> Result<Option<LicensePayload>, AppError> {
        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(license_file)
            .output()
            .map_err(|e| {
                AppError::process_failed(&self.program, ProcessFailure::Spawn(e.to_string()))
            })?;

        if !output.status.success() {
            tracing::debug!(
                status = ?output.status.code(),
                stderr = %String::from_utf8_lossy(&output.stderr).trim(),
                "license decoder rejected key"
            );
            return Ok(None);
        }

        Ok(LicensePayload::parse(&String::from_utf8_lossy(&output.stdout)))
    }
}
