use thiserror::Error;

use super::RepositoryError;

/// Failures of the two registry operations.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The submitted URL is not a well-formed absolute URL
    #[error("Validation error: {0}")]
    Validation(String),

    /// No record carries the requested short code
    #[error("Not found: {0}")]
    NotFound(String),

    /// The store did not hand out a usable identifier for a new record
    #[error("Allocation error: {0}")]
    Allocation(String),

    /// Any other store access failure
    #[error("Storage error: {0}")]
    Storage(#[from] RepositoryError),
}

impl From<validator::ValidationError> for RegistryError {
    fn from(err: validator::ValidationError) -> Self {
        let message = err
            .message
            .map(|m| m.into_owned())
            .unwrap_or_else(|| err.code.into_owned());
        RegistryError::Validation(message)
    }
}
