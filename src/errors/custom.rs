use diesel::result::{DatabaseErrorKind, Error as DieselError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CustomError {
    #[error("Database Error: {0}")]
    DatabaseError(#[from] DbError),

    #[error("Seed Error: {0}")]
    SeedError(#[from] SeedError),

    #[error("Validation Error: {0}")]
    ValidationError(String),

    #[error("Configuration Error: {0}")]
    ConfigError(#[from] config::ConfigError),
}

#[derive(Debug, Error)]
pub enum DbError {
    #[error("Connection Error: {0}")]
    ConnectionError(String),

    #[error("Migration Error: {0}")]
    MigrationError(String),

    #[error("Uniqueness Violation: {0}")]
    UniqueViolation(String),

    #[error("Foreign Key Violation: {0}")]
    ForeignKeyViolation(String),

    #[error("Query Error: {0}")]
    QueryBuilderError(String),
}

#[derive(Debug, Error)]
pub enum SeedError {
    /// Random selection had nothing to pick from, e.g. orders before customers.
    #[error("No valid choice available: no {0} exist")]
    EmptyChoice(&'static str),

    #[error("Invalid weights: {0}")]
    InvalidWeights(String),

    #[error("Gave up drawing a unique {0}")]
    Exhausted(&'static str),
}

impl From<DieselError> for DbError {
    fn from(err: DieselError) -> Self {
        match err {
            DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
                DbError::UniqueViolation(info.message().to_string())
            }
            DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, info) => {
                DbError::ForeignKeyViolation(info.message().to_string())
            }
            other => DbError::QueryBuilderError(other.to_string()),
        }
    }
}

// Needed so diesel transactions can roll back on any of our errors.
impl From<DieselError> for CustomError {
    fn from(err: DieselError) -> Self {
        CustomError::DatabaseError(err.into())
    }
}

impl From<diesel::ConnectionError> for CustomError {
    fn from(err: diesel::ConnectionError) -> Self {
        CustomError::DatabaseError(DbError::ConnectionError(err.to_string()))
    }
}

impl CustomError {
    pub fn is_unique_violation(&self) -> bool {
        matches!(
            self,
            CustomError::DatabaseError(DbError::UniqueViolation(_))
        )
    }
}
