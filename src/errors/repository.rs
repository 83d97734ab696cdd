use sqlx::error::ErrorKind;
use sqlx::Error as SqlxError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RepositoryError {
    /// Database connection or query errors
    #[error("Database error: {0}")]
    Database(SqlxError),

    /// Entity not found
    #[error("Record not found: {0}")]
    NotFound(String),

    /// Unique constraint violation
    #[error("Conflict error: {0}")]
    Conflict(String),

    /// Invalid input data
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl From<SqlxError> for RepositoryError {
    fn from(err: SqlxError) -> Self {
        match err {
            SqlxError::RowNotFound => Self::NotFound("Resource not found".to_string()),
            // Map constraint failures to more meaningful application errors
            SqlxError::Database(db_err) => match db_err.kind() {
                ErrorKind::UniqueViolation => {
                    Self::Conflict(format!("Resource already exists: {}", db_err.message()))
                }
                ErrorKind::ForeignKeyViolation => {
                    Self::InvalidData("Referenced resource does not exist".to_string())
                }
                ErrorKind::NotNullViolation | ErrorKind::CheckViolation => {
                    Self::InvalidData("Data violates constraints".to_string())
                }
                _ => Self::Database(SqlxError::Database(db_err)),
            },
            _ => Self::Database(err),
        }
    }
}
