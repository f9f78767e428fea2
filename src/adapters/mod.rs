mod command_license_service;
mod dialoguer_prompter;
mod mysql_database_probe;
mod system_process_runner;
mod terminal_console;

pub use command_license_service::CommandLicenseService;
pub use dialoguer_prompter::DialoguerPrompter;
pub use mysql_database_probe::MysqlDatabaseProbe;
pub use system_process_runner::SystemProcessRunner;
pub use terminal_console::TerminalConsole;
