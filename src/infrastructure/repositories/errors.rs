use sqlx::error::ErrorKind;

use crate::domain::errors::RepositoryError;

/// Maps a driver error onto the repository error kinds
///
/// `context` names the failed operation and prefixes the message.
pub(crate) fn map_sqlx_error(context: &str, err: sqlx::Error) -> RepositoryError {
    if let sqlx::Error::Database(db_err) = &err {
        match db_err.kind() {
            ErrorKind::ForeignKeyViolation | ErrorKind::UniqueViolation => {
                return RepositoryError::Constraint(format!("{}: {}", context, db_err.message()));
            }
            ErrorKind::NotNullViolation | ErrorKind::CheckViolation => {
                return RepositoryError::InvalidInput(format!("{}: {}", context, db_err.message()));
            }
            _ => {}
        }
    }

    RepositoryError::Storage(format!("{}: {}", context, err))
}
