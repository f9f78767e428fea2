pub mod config;
pub mod environment;
mod error;
mod feature_name;
mod install_request;
pub mod license;
pub mod manifest;
pub mod process;
mod stage;

pub use config::{ExitStatusPolicy, InstallerConfig};
pub use environment::{EnvRewrite, replace_assignment};
pub use error::{AppError, ProcessFailure};
pub use feature_name::FeatureName;
pub use install_request::{InstallRequest, is_plain_database_name, validate_install_path};
pub use license::{LicenseKey, LicensePayload};
pub use manifest::{DependencyManifest, MANIFEST_FILE};
pub use process::{
    CommandSpec, OutputChunk, OutputStream, ProcessEvent, ProcessEvents, ProcessOutcome,
};
pub use stage::{InstallReport, InstallStage};
