use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::DatabaseProbe;

/// Database probe over a fixed list of existing databases.
#[derive(Default)]
pub struct FakeDatabaseProbe {
    pub existing: Vec<String>,
    pub checked: Mutex<Vec<String>>,
}

impl FakeDatabaseProbe {
    pub fn with_databases(names: &[&str]) -> Self {
        Self { existing: names.iter().map(|n| n.to_string()).collect(), ..Self::default() }
    }
}

impl DatabaseProbe for FakeDatabaseProbe {
    fn database_exists(&self, name: &str) -> Result<bool, AppError> {
        self.checked.lock().unwrap().push(name.to_string());
        Ok(self.existing.iter().any(|db| db == name))
    }
}
