//! Database migration, license registration and seeding.

use std::path::Path;

use super::step::run_command;
use crate::app::AppContext;
use crate::domain::config::MigrationsConfig;
use crate::domain::{AppError, CommandSpec, LicenseKey};
use crate::ports::{Console, LicenseService, ProcessRunner};

/// The three artisan commands, in execution order.
pub fn migration_commands(
    config: &MigrationsConfig,
    path: &Path,
    license_key: &LicenseKey,
) -> [CommandSpec; 3] {
    let artisan =
        |task: &str| CommandSpec::new(&config.php).arg("artisan").arg(task).current_dir(path);
    [
        artisan(config.migrate.as_str()),
        artisan(config.update_license.as_str()).secret_arg(license_key.expose()),
        artisan(config.seed.as_str()),
    ]
}

/// Run migrations, register the license and seed. Stops at the first failing command.
pub fn migrate_and_seed<L, R, C>(
    ctx: &AppContext<L, R, C>,
    path: &Path,
    license_key: &LicenseKey,
) -> Result<(), AppError>
where
    L: LicenseService,
    R: ProcessRunner,
    C: Console,
{
    for spec in migration_commands(&ctx.config().migrations, path, license_key) {
        run_command(ctx, spec)?;
    }
    Ok(())
}
