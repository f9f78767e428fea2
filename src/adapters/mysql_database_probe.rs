use std::process::Command;

use crate::domain::config::DatabaseConfig;
use crate::domain::{AppError, ProcessFailure, is_plain_database_name};
use crate::ports::DatabaseProbe;

/// Database check through the `mysql` command-line client.
#[derive(Debug, Clone)]
pub struct MysqlDatabaseProbe {
    config: DatabaseConfig,
}

impl MysqlDatabaseProbe {
    pub fn new(config: DatabaseConfig) -> Self {
        Self { config }
    }

    fn command(&self, name: &str) -> Command {
        let mut command = Command::new(&self.config.client);
        command
            .arg(format!("--host={}", self.config.host))
            .arg(format!("--user={}", self.config.user))
            .args(["--batch", "--skip-column-names", "-e"])
            .arg(format!("SHOW DATABASES LIKE '{}'", name));
        // Keeps the password out of the process list.
        if !self.config.password.is_empty() {
            command.env("MYSQL_PWD", &self.config.password);
        }
        command
    }
}

impl DatabaseProbe for MysqlDatabaseProbe {
    fn database_exists(&self, name: &str) -> Result<bool, AppError> {
        if !is_plain_database_name(name) {
            return Ok(false);
        }

        let output = self.command(name).output().map_err(|e| {
            AppError::process_failed(&self.config.client, ProcessFailure::Spawn(e.to_string()))
        })?;

        if !output.status.success() {
            tracing::warn!(
                host = %self.config.host,
                "{}",
                String::from_utf8_lossy(&output.stderr).trim()
            );
            return Err(AppError::process_failed(
                &self.config.client,
                ProcessFailure::ExitStatus(output.status.code()),
            ));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(stdout.lines().any(|line| line.trim() == name))
    }
}
