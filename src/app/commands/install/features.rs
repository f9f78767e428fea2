//! Feature dependency installation.

use std::fs;
use std::path::Path;

use super::step::run_command;
use crate::app::AppContext;
use crate::domain::config::PackageManagerConfig;
use crate::domain::{AppError, CommandSpec, DependencyManifest, FeatureName, MANIFEST_FILE};
use crate::ports::{Console, LicenseService, ProcessRunner};

/// `composer update --no-interaction`, run inside the project.
pub fn update_command(config: &PackageManagerConfig, path: &Path) -> CommandSpec {
    CommandSpec::new(&config.program).args(["update", "--no-interaction"]).current_dir(path)
}

/// Add one dependency per feature to the project manifest and write it back.
pub fn update_manifest(
    project: &Path,
    config: &PackageManagerConfig,
    features: &[FeatureName],
) -> Result<DependencyManifest, AppError> {
    let manifest_path = project.join(MANIFEST_FILE);
    let content = fs::read_to_string(&manifest_path).map_err(|e| AppError::ManifestInvalid {
        path: manifest_path.clone(),
        details: e.to_string(),
    })?;

    let mut manifest = DependencyManifest::parse(&manifest_path, &content)?;
    manifest.require_features(&config.vendor, &config.feature_constraint, features)?;
    fs::write(&manifest_path, manifest.to_pretty_string()?)?;

    let path = manifest.path().display();
    tracing::debug!(%path, features = features.len(), "manifest updated");
    Ok(manifest)
}

/// Require every licensed feature, then let the package manager install them.
pub fn install_features<L, R, C>(
    ctx: &AppContext<L, R, C>,
    path: &Path,
    features: &[FeatureName],
) -> Result<(), AppError>
where
    L: LicenseService,
    R: ProcessRunner,
    C: Console,
{
    let config = &ctx.config().package_manager;
    update_manifest(path, config, features)?;
    run_command(ctx, update_command(config, path))
}
