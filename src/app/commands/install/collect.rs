//! Collecting the install request from arguments or prompts.

use std::path::PathBuf;

use crate::domain::{AppError, InstallRequest, LicenseKey, validate_install_path};
use crate::ports::{DatabaseProbe, Prompter};

pub const LICENSE_PROMPT: &str = "Enter the Platform license key";
pub const PATH_PROMPT: &str = "Enter the installation path";
pub const DATABASE_PROMPT: &str = "Enter the database name";

/// Build a request from positional arguments. No database step.
pub fn from_arguments(path: PathBuf, license_key: &str) -> Result<InstallRequest, AppError> {
    validate_install_path(&path)?;
    Ok(InstallRequest::new(LicenseKey::new(license_key), path))
}

/// Ask for license key, install path and database name. `Ok(None)` when cancelled.
pub fn interactive<P, D>(prompter: &P, probe: &D) -> Result<Option<InstallRequest>, AppError>
where
    P: Prompter,
    D: DatabaseProbe,
{
    let Some(license_key) = prompter.ask(LICENSE_PROMPT)? else {
        return Ok(None);
    };

    let Some(path) = prompter.ask(PATH_PROMPT)? else {
        return Ok(None);
    };
    let path = PathBuf::from(path.trim());
    validate_install_path(&path)?;

    let validate = |answer: &str| validate_database(probe, answer);
    let Some(database) = prompter.ask_validated(DATABASE_PROMPT, &validate)? else {
        return Ok(None);
    };

    Ok(Some(InstallRequest::new(LicenseKey::new(license_key), path).with_database(database)))
}

/// Accept `answer` only when the named database exists.
pub fn validate_database<D: DatabaseProbe>(probe: &D, answer: &str) -> Result<String, AppError> {
    let name = answer.trim();
    if probe.database_exists(name)? {
        Ok(name.to_string())
    } else {
        Err(AppError::DatabaseNotFound(name.to_string()))
    }
}
