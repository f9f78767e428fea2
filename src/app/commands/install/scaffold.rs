//! Base system scaffolding.

use std::path::Path;

use super::step::run_command;
use crate::app::AppContext;
use crate::domain::config::PackageManagerConfig;
use crate::domain::{AppError, CommandSpec};
use crate::ports::{Console, LicenseService, ProcessRunner};

/// `composer create-project <base> --no-interaction --repository-url=.. --stability=.. <path>`
pub fn create_project_command(config: &PackageManagerConfig, path: &Path) -> CommandSpec {
    CommandSpec::new(&config.program)
        .arg("create-project")
        .arg(&config.base_package)
        .arg("--no-interaction")
        .arg(format!("--repository-url={}", config.repository_url))
        .arg(format!("--stability={}", config.stability))
        .arg(path.to_string_lossy())
}

/// Scaffold the base project at `path`.
pub fn install_base_system<L, R, C>(ctx: &AppContext<L, R, C>, path: &Path) -> Result<(), AppError>
where
    L: LicenseService,
    R: ProcessRunner,
    C: Console,
{
    run_command(ctx, create_project_command(&ctx.config().package_manager, path))
}
