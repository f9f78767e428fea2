//! Installer configuration models.

use std::time::Duration;

use serde::Deserialize;

/// Installer configuration, loaded from TOML. Every field has a default.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InstallerConfig {
    #[serde(default)]
    pub package_manager: PackageManagerConfig,
    #[serde(default)]
    pub license: LicenseConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub environment: EnvironmentConfig,
    #[serde(default)]
    pub migrations: MigrationsConfig,
    #[serde(default)]
    pub process: ProcessConfig,
}

/// Package manager used to scaffold the project and install features.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PackageManagerConfig {
    pub program: String,
    /// Package scaffolded as the base project.
    pub base_package: String,
    pub repository_url: String,
    pub stability: String,
    /// Vendor prefix of feature packages.
    pub vendor: String,
    /// Constraint written for every feature dependency.
    pub feature_constraint: String,
}

impl Default for PackageManagerConfig {
    fn default() -> Self {
        Self {
            program: "composer".to_string(),
            base_package: "ahead4-platform/base".to_string(),
            repository_url: "http://packages.ahead4.com".to_string(),
            stability: "dev".to_string(),
            vendor: "ahead4-platform".to_string(),
            feature_constraint: "dev-master".to_string(),
        }
    }
}

/// External license decoder. Invoked as `<program> <args...> <license-file>`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LicenseConfig {
    pub program: String,
    pub args: Vec<String>,
    /// File name prefix of the transient license key file.
    pub temp_prefix: String,
}

impl Default for LicenseConfig {
    fn default() -> Self {
        Self {
            program: "platform-license".to_string(),
            args: vec!["decode".to_string()],
            temp_prefix: "platform-license".to_string(),
        }
    }
}

/// Connection used by the interactive database check.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DatabaseConfig {
    pub client: String,
    pub host: String,
    pub user: String,
    pub password: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            client: "mysql".to_string(),
            host: "127.0.0.1".to_string(),
            user: "root".to_string(),
            password: String::new(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EnvironmentConfig {
    /// Environment file, relative to the install path.
    pub file: String,
    pub key: String,
    /// Value the scaffold ships with, replaced by the chosen database name.
    pub default_value: String,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            file: ".env".to_string(),
            key: "DB_DATABASE".to_string(),
            default_value: "platform".to_string(),
        }
    }
}

/// Artisan commands run after installation.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MigrationsConfig {
    pub php: String,
    pub migrate: String,
    pub update_license: String,
    pub seed: String,
}

impl Default for MigrationsConfig {
    fn default() -> Self {
        Self {
            php: "php".to_string(),
            migrate: "platform:migrate".to_string(),
            update_license: "platform:update-license".to_string(),
            seed: "platform:seed".to_string(),
        }
    }
}

/// How external commands are supervised.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProcessConfig {
    pub timeout_secs: u64,
    pub exit_status: ExitStatusPolicy,
}

impl Default for ProcessConfig {
    fn default() -> Self {
        Self { timeout_secs: 600, exit_status: ExitStatusPolicy::default() }
    }
}

impl ProcessConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// What a non-zero exit status means for the pipeline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExitStatusPolicy {
    /// Non-zero exit halts the pipeline.
    #[default]
    Strict,
    /// Non-zero exit is reported as a warning and the pipeline continues.
    Lenient,
}
