use thiserror::Error;

/// Errors returned by every repository operation
///
/// The variant is the error kind; the payload is the human-readable message.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Constraint violation: {0}")]
    Constraint(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl RepositoryError {
    /// Short, stable name of the error kind, logged as the `kind` field
    pub fn kind(&self) -> &'static str {
        match self {
            RepositoryError::InvalidInput(_) => "invalid_input",
            RepositoryError::Constraint(_) => "constraint",
            RepositoryError::Storage(_) => "storage",
        }
    }
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;
