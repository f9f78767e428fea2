mod console;
mod database_probe;
mod license_service;
mod process_runner;
mod prompter;

pub use console::Console;
pub use database_probe::DatabaseProbe;
pub use license_service::LicenseService;
pub use process_runner::ProcessRunner;
pub use prompter::{Prompter, Validator};
