//! platform-installer: one-shot installer for the Platform.
//!
//! Decrypts the license key, scaffolds the base project through the package manager,
//! requires every licensed feature, and in interactive mode points the environment at the
//! chosen database and migrates it.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

use std::path::Path;

use adapters::{
    CommandLicenseService, DialoguerPrompter, MysqlDatabaseProbe, SystemProcessRunner,
    TerminalConsole,
};
use app::{AppContext, commands::install};

pub use app::commands::install::InstallMode;
pub use domain::{AppError, InstallReport, InstallStage};

/// Run the installer against the real system.
///
/// `config_path` overrides the config lookup. Returns `Ok(None)` when the user cancelled an
/// interactive prompt.
pub fn install(
    mode: InstallMode,
    config_path: Option<&Path>,
) -> Result<Option<InstallReport>, AppError> {
    let config = app::config::load_config(config_path)?;
    let license = CommandLicenseService::from_config(&config.license);
    let probe = MysqlDatabaseProbe::new(config.database.clone());
    let ctx = AppContext::new(config, license, SystemProcessRunner::new(), TerminalConsole::new());

    install::run(&ctx, mode, &DialoguerPrompter::new(), &probe)
}
