//! Installer configuration loading.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{AppError, InstallerConfig};

/// Environment variable naming a config file when `--config` is not given.
pub const CONFIG_ENV_VAR: &str = "PLATFORM_INSTALLER_CONFIG";

/// Load the installer configuration.
///
/// Lookup order: `explicit` path, then `$PLATFORM_INSTALLER_CONFIG`, then built-in defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<InstallerConfig, AppError> {
    let path = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => std::env::var_os(CONFIG_ENV_VAR).filter(|v| !v.is_empty()).map(PathBuf::from),
    };

    match path {
        Some(path) => read_config_file(&path),
        None => Ok(InstallerConfig::default()),
    }
}

/// Read and parse a config file that must exist.
pub fn read_config_file(path: &Path) -> Result<InstallerConfig, AppError> {
    if !path.is_file() {
        return Err(AppError::config_error(format!("Config file not found: {}", path.display())));
    }
    let content = fs::read_to_string(path)?;
    tracing::debug!(path = %path.display(), "loaded installer config");
    parse_config_content(&content)
}

pub fn parse_config_content(content: &str) -> Result<InstallerConfig, AppError> {
    let config: InstallerConfig = toml::from_str(content)?;
    validate(&config)?;
    Ok(config)
}

fn validate(config: &InstallerConfig) -> Result<(), AppError> {
    let required = [
        ("package_manager.program", &config.package_manager.program),
        ("package_manager.base_package", &config.package_manager.base_package),
        ("package_manager.vendor", &config.package_manager.vendor),
        ("package_manager.feature_constraint", &config.package_manager.feature_constraint),
        ("license.program", &config.license.program),
        ("database.client", &config.database.client),
        ("environment.file", &config.environment.file),
        ("environment.key", &config.environment.key),
        ("migrations.php", &config.migrations.php),
    ];
    for (name, value) in required {
        if value.trim().is_empty() {
            return Err(AppError::config_error(format!("'{name}' must not be empty")));
        }
    }

    if config.package_manager.vendor.contains('/') {
        return Err(AppError::config_error("'package_manager.vendor' must not contain '/'"));
    }
    if config.process.timeout_secs == 0 {
        return Err(AppError::config_error("'process.timeout_secs' must be greater than zero"));
    }
    Ok(())
}
