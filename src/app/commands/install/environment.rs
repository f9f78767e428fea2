//! Environment file configuration.

use std::fs;
use std::path::Path;

use crate::app::AppContext;
use crate::domain::config::EnvironmentConfig;
use crate::domain::{AppError, replace_assignment};
use crate::ports::{Console, LicenseService, ProcessRunner};

/// Point the environment file at `database`. Returns the number of lines replaced.
pub fn configure_environment_file(
    env_path: &Path,
    config: &EnvironmentConfig,
    database: &str,
) -> Result<usize, AppError> {
    if !env_path.is_file() {
        return Err(AppError::EnvironmentFileMissing(env_path.to_path_buf()));
    }

    let contents = fs::read_to_string(env_path)?;
    let rewrite = replace_assignment(&contents, &config.key, &config.default_value, database);
    if rewrite.replaced > 0 {
        fs::write(env_path, rewrite.contents)?;
    }
    Ok(rewrite.replaced)
}

pub fn setup_environment<L, R, C>(
    ctx: &AppContext<L, R, C>,
    path: &Path,
    database: &str,
) -> Result<(), AppError>
where
    L: LicenseService,
    R: ProcessRunner,
    C: Console,
{
    let config = &ctx.config().environment;
    let env_path = path.join(&config.file);

    match configure_environment_file(&env_path, config, database)? {
        0 => ctx.console().warn(&format!(
            "No '{}={}' line in {}; database name left unchanged.",
            config.key,
            config.default_value,
            env_path.display()
        )),
        1 => {}
        n => tracing::warn!(
            count = n,
            path = %env_path.display(),
            "replaced multiple placeholder lines"
        ),
    }
    Ok(())
}
