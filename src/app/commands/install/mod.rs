//! The `install` command.
//!
//! Collecting → Decrypting → Scaffolding → InstallingFeatures
//! → [ConfiguringEnvironment → Migrating] → Done. Any stage may fail; a failure halts the
//! pipeline without cleanup or retry.

pub mod collect;
pub mod decrypt;
pub mod environment;
pub mod features;
pub mod migrate;
pub mod scaffold;
mod step;

use std::path::PathBuf;

use crate::app::AppContext;
use crate::domain::{
    AppError, InstallReport, InstallRequest, InstallStage, LicensePayload, validate_install_path,
};
use crate::ports::{Console, DatabaseProbe, LicenseService, ProcessRunner, Prompter};

/// Where the install request comes from.
#[derive(Debug, Clone)]
pub enum InstallMode {
    /// Prompt for license key, path and database; configures the environment and migrates.
    Interactive,
    /// Positional path and license key; stops after feature installation.
    Arguments { path: PathBuf, license_key: String },
}

/// Collect the request for `mode`, then run the pipeline. `Ok(None)` when the user cancelled.
pub fn run<L, R, C, P, D>(
    ctx: &AppContext<L, R, C>,
    mode: InstallMode,
    prompter: &P,
    probe: &D,
) -> Result<Option<InstallReport>, AppError>
where
    L: LicenseService,
    R: ProcessRunner,
    C: Console,
    P: Prompter,
    D: DatabaseProbe,
{
    let request = match mode {
        InstallMode::Arguments { path, license_key } => {
            collect::from_arguments(path, &license_key)?
        }
        InstallMode::Interactive => match collect::interactive(prompter, probe)? {
            Some(request) => request,
            None => {
                ctx.console().warn("Installation cancelled.");
                return Ok(None);
            }
        },
    };

    execute(ctx, &request).map(Some)
}

/// Run every stage for an already collected request.
pub fn execute<L, R, C>(
    ctx: &AppContext<L, R, C>,
    request: &InstallRequest,
) -> Result<InstallReport, AppError>
where
    L: LicenseService,
    R: ProcessRunner,
    C: Console,
{
    let mut progress = Progress::new(ctx.console());
    let path = &request.install_path;

    progress.enter(InstallStage::Collecting);
    validate_install_path(path)?;

    progress.enter(InstallStage::Decrypting);
    let license =
        decrypt::decrypt_license(ctx.license(), &ctx.config().license, &request.license_key)?;
    let licensed = match license {
        Some(LicensePayload { valid: true, features }) => features,
        _ => return Err(AppError::LicenseInvalid),
    };
    let names: Vec<&str> = licensed.iter().map(|f| f.as_str()).collect();
    tracing::debug!(features = ?names, "license decrypted");

    progress.enter(InstallStage::Scaffolding);
    scaffold::install_base_system(ctx, path)?;

    progress.enter(InstallStage::InstallingFeatures);
    features::install_features(ctx, path, &licensed)?;

    if let Some(database) = &request.database_name {
        progress.enter(InstallStage::ConfiguringEnvironment);
        environment::setup_environment(ctx, path, database)?;

        progress.enter(InstallStage::Migrating);
        migrate::migrate_and_seed(ctx, path, &request.license_key)?;
    }

    progress.enter(InstallStage::Done);
    Ok(progress.finish())
}

struct Progress<'a, C: Console> {
    console: &'a C,
    report: InstallReport,
}

impl<'a, C: Console> Progress<'a, C> {
    fn new(console: &'a C) -> Self {
        Self { console, report: InstallReport::default() }
    }

    fn enter(&mut self, stage: InstallStage) {
        tracing::debug!(%stage, "entering stage");
        if let Some(banner) = stage.banner() {
            self.console.info(banner);
        }
        self.report.stages.push(stage);
    }

    fn finish(self) -> InstallReport {
        self.report
    }
}
