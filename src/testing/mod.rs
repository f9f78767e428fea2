pub mod ports;

#[allow(unused_imports)]
pub use ports::FakeDatabaseProbe;
#[allow(unused_imports)]
pub use ports::FakeLicenseService;
#[allow(unused_imports)]
pub use ports::FakeProcessRunner;
#[allow(unused_imports)]
pub use ports::RecordingConsole;
#[allow(unused_imports)]
pub use ports::ScriptedPrompter;
