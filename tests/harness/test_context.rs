//! Shared testing harness for `platform` integration tests.

use assert_cmd::Command;
use assert_fs::TempDir;
use std::fs;
use std::path::{Path, PathBuf};

/// Testing harness providing an isolated environment for CLI exercises.
pub(crate) struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

impl TestContext {
    /// Create a new isolated environment.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    pub(crate) fn root(&self) -> &Path {
        self.root.path()
    }

    /// Path to the directory used as the CLI's working directory.
    pub(crate) fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `platform` binary.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("platform").expect("Failed to locate platform binary");
        cmd.current_dir(&self.work_dir)
            .env("HOME", self.root.path())
            .env("NO_COLOR", "1")
            .env_remove("PLATFORM_INSTALLER_CONFIG")
            .env_remove("RUST_LOG");
        cmd
    }

    /// Write an installer config file into the sandbox and return its path.
    pub(crate) fn write_config(&self, content: &str) -> PathBuf {
        let path = self.root.path().join("installer.toml");
        fs::write(&path, content).expect("Failed to write installer config");
        path
    }
}
