use thiserror::Error;

use crate::validation::ValidationReport;

/// Errors related to customer operations.
#[derive(Debug, Error)]
pub enum CustomerError {
    #[error("customer not found")]
    NotFound,

    #[error("validation failed: {0}")]
    Validation(ValidationReport),

    #[error("storage error: {0}")]
    StorageError(String),
}

/// Errors from repository operations (used by trait definitions in clientele-core).
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database connection error")]
    Connection,

    #[error("query error: {0}")]
    Query(String),

    #[error("entity not found")]
    NotFound,
}
