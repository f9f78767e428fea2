use std::path::Path;

use crate::domain::{AppError, LicensePayload};

/// Port for the opaque license decryption facility.
pub trait LicenseService {
    /// Decrypt the license key stored in `license_file`.
    ///
    /// `Ok(None)` means the key could not be decrypted (malformed, expired, bad signature).
    /// `Err` is reserved for failures of the facility itself.
    fn license_data(&self, license_file: &Path) -> Result<Option<LicensePayload>, AppError>;
}
