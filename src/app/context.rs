use crate::domain::InstallerConfig;
use crate::ports::{Console, LicenseService, ProcessRunner};

/// Application context holding configuration and dependencies for the install pipeline.
pub struct AppContext<L: LicenseService, R: ProcessRunner, C: Console> {
    config: InstallerConfig,
    license: L,
    runner: R,
    console: C,
}

impl<L: LicenseService, R: ProcessRunner, C: Console> AppContext<L, R, C> {
    /// Create a new application context.
    pub fn new(config: InstallerConfig, license: L, runner: R, console: C) -> Self {
        Self { config, license, runner, console }
    }

    pub fn config(&self) -> &InstallerConfig {
        &self.config
    }

    /// Get a reference to the license decryption facility.
    pub fn license(&self) -> &L {
        &self.license
    }

    /// Get a reference to the external process runner.
    pub fn runner(&self) -> &R {
        &self.runner
    }

    pub fn console(&self) -> &C {
        &self.console
    }
}
