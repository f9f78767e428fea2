use std::fmt;

/// Pipeline stages, in execution order.
///
/// `ConfiguringEnvironment` and `Migrating` only occur when a database name was collected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallStage {
    Collecting,
    Decrypting,
    Scaffolding,
    InstallingFeatures,
    ConfiguringEnvironment,
    Migrating,
    Done,
}

impl InstallStage {
    /// Console banner printed when the stage starts, if it has one.
    pub fn banner(&self) -> Option<&'static str> {
        match self {
            InstallStage::Scaffolding => Some("Installing base system..."),
            InstallStage::InstallingFeatures => Some("Installing features..."),
            InstallStage::ConfiguringEnvironment => Some("Setting up the environment..."),
            InstallStage::Migrating => Some("Migrating and seeding database..."),
            InstallStage::Done => Some("Installation complete."),
            InstallStage::Collecting | InstallStage::Decrypting => None,
        }
    }
}

impl fmt::Display for InstallStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            InstallStage::Collecting => "collecting",
            InstallStage::Decrypting => "decrypting",
            InstallStage::Scaffolding => "scaffolding",
            InstallStage::InstallingFeatures => "installing-features",
            InstallStage::ConfiguringEnvironment => "configuring-environment",
            InstallStage::Migrating => "migrating",
            InstallStage::Done => "done",
        };
        f.write_str(name)
    }
}

/// Stages a finished pipeline passed through.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallReport {
    pub stages: Vec<InstallStage>,
}

impl InstallReport {
    pub fn completed(&self) -> bool {
        self.stages.last() == Some(&InstallStage::Done)
    }
}
