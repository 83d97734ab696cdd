use std::io::Error as IoError;

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use log::error;
use serde_json::json;
use thiserror::Error;

pub mod config;
pub mod registry;
pub mod repository;

pub use config::ConfigError;
pub use registry::RegistryError;
pub use repository::RepositoryError;

use crate::db::DatabaseError;

#[derive(Debug, Error)]
pub enum AppError {
    // Service-level domain errors
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),
    #[error("Not found error: {0}")]
    NotFound(String),
    #[error("Allocation error: {0}")]
    Allocation(String),
    #[error("Internal error: {0}")]
    Internal(String),
    // Infrastructure/system errors
    #[error("Server error: {0}")]
    Server(#[from] IoError),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Logger error: {0}")]
    Logger(String),
    #[error("Database error: {0}")]
    Database(String),
}

impl AppError {
    /// Machine readable error kind used in JSON error bodies
    pub fn error_type(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::PayloadTooLarge(_) => "PAYLOAD_TOO_LARGE",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::Allocation(_) => "ALLOCATION_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
            AppError::Server(_) => "SERVER_ERROR",
            AppError::Config(_) => "CONFIGURATION_ERROR",
            AppError::Logger(_) => "LOGGER_ERROR",
            AppError::Database(_) => "DATABASE_ERROR",
        }
    }

    fn message(&self) -> String {
        match self {
            AppError::Validation(msg)
            | AppError::PayloadTooLarge(msg)
            | AppError::NotFound(msg)
            | AppError::Allocation(msg)
            | AppError::Internal(msg)
            | AppError::Config(msg)
            | AppError::Logger(msg)
            | AppError::Database(msg) => msg.clone(),
            AppError::Server(e) => e.to_string(),
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(e: ConfigError) -> Self {
        AppError::Config(e.to_string())
    }
}

impl From<DatabaseError> for AppError {
    fn from(e: DatabaseError) -> Self {
        AppError::Database(e.to_string())
    }
}

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(msg) => AppError::NotFound(msg),
            RepositoryError::InvalidData(msg) => AppError::Validation(msg),
            RepositoryError::Conflict(msg) => AppError::Internal(msg),
            RepositoryError::Database(e) => AppError::Internal(e.to_string()),
        }
    }
}

impl From<RegistryError> for AppError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::Validation(msg) => AppError::Validation(msg),
            RegistryError::NotFound(msg) => AppError::NotFound(msg),
            RegistryError::Allocation(msg) => AppError::Allocation(msg),
            // Store failures never leak driver details to clients
            RegistryError::Storage(e) => {
                error!("Storage failure: {}", e);
                AppError::Internal("A storage error occurred".to_string())
            }
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::Allocation(_)
            | AppError::Internal(_)
            | AppError::Server(_)
            | AppError::Config(_)
            | AppError::Logger(_)
            | AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = self.message();
        let message = if message.is_empty() {
            "An error occurred".to_string()
        } else {
            message
        };

        let code = self.status_code().as_u16();
        HttpResponse::build(self.status_code()).json(json!({
            "type": self.error_type(),
            "message": message,
            "status_code": code,
        }))
    }
}

#[cfg(test)]
mod tests {
    use actix_web::body::to_bytes;

    use super::*;

    #[test]
    fn test_registry_errors_map_to_http_statuses() {
        let cases = [
            (RegistryError::Validation("bad".into()), StatusCode::UNPROCESSABLE_ENTITY),
            (RegistryError::NotFound("zzz".into()), StatusCode::NOT_FOUND),
            (RegistryError::Allocation("no id".into()), StatusCode::INTERNAL_SERVER_ERROR),
            (
                RegistryError::Storage(RepositoryError::Conflict("dup".into())),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(AppError::from(err).status_code(), expected);
        }
    }

    #[test]
    fn test_storage_errors_are_not_exposed() {
        let err = AppError::from(RegistryError::Storage(RepositoryError::InvalidData(
            "column short_code".into(),
        )));
        assert!(!err.to_string().contains("short_code"));
    }

    #[actix_web::test]
    async fn test_error_body_shape() {
        let response = AppError::NotFound("Short URL not found: zzz".into()).error_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = to_bytes(response.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["type"], "NOT_FOUND");
        assert_eq!(json["message"], "Short URL not found: zzz");
        assert_eq!(json["status_code"], 404);
    }
}
