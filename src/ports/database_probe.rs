use crate::domain::AppError;

/// Port for the live database-existence check.
pub trait DatabaseProbe {
    /// Whether a database with this name exists and is reachable.
    fn database_exists(&self, name: &str) -> Result<bool, AppError>;
}
