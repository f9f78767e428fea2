use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::domain::{AppError, FeatureName, LicensePayload};
use crate::ports::LicenseService;

/// License service returning a fixed payload and recording what it was handed.
#[derive(Default)]
pub struct FakeLicenseService {
    pub payload: Option<LicensePayload>,
    pub fail: bool,
    /// `(license file path, file contents at call time)` per call.
    pub calls: Mutex<Vec<(PathBuf, String)>>,
}

impl FakeLicenseService {
    pub fn licensed(features: &[&str]) -> Self {
        let features = features.iter().map(|f| FeatureName::new(f).unwrap()).collect();
        Self { payload: Some(LicensePayload { valid: true, features }), ..Self::default() }
    }

    pub fn undecryptable() -> Self {
        Self::default()
    }

    pub fn revoked() -> Self {
        Self { payload: Some(LicensePayload { valid: false, features: vec![] }), ..Self::default() }
    }

    pub fn broken() -> Self {
        Self { fail: true, ..Self::default() }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl LicenseService for FakeLicenseService {
    fn license_data(&self, license_file: &Path) -> Result<Option<LicensePayload>, AppError> {
        let contents = fs::read_to_string(license_file).unwrap_or_default();
        self.calls.lock().unwrap().push((license_file.to_path_buf(), contents));
        if self.fail {
            return Err(AppError::config_error("license facility unavailable"));
        }
        Ok(self.payload.clone())
    }
}
