mod console_recorder;
mod database_probe_stub;
mod license_service_stub;
mod process_runner_stub;
mod prompter_script;

pub use self::console_recorder::RecordingConsole;
pub use self::database_probe_stub::FakeDatabaseProbe;
pub use self::license_service_stub::FakeLicenseService;
pub use self::process_runner_stub::FakeProcessRunner;
pub use self::prompter_script::ScriptedPrompter;
