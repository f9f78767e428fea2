//! License decryption through a scoped temporary key file.

use std::io::Write;

use crate::domain::config::LicenseConfig;
use crate::domain::{AppError, LicenseKey, LicensePayload};
use crate::ports::LicenseService;

/// Decrypt `key` into its payload. `Ok(None)` when the key does not decrypt.
///
/// The key is written to a uniquely named temporary file for the file-based facility;
/// the file is removed on every return path.
pub fn decrypt_license<S: LicenseService>(
    service: &S,
    config: &LicenseConfig,
    key: &LicenseKey,
) -> Result<Option<LicensePayload>, AppError> {
    if key.is_empty() {
        return Ok(None);
    }

    let mut file = tempfile::Builder::new().prefix(&config.temp_prefix).tempfile()?;
    file.write_all(key.expose().as_bytes())?;
    file.flush()?;

    let payload = service.license_data(file.path());
    drop(file);
    payload
}
