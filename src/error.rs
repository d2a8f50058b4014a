use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use sea_orm::DbErr;
use thiserror::Error;
use tracing::error;

use crate::schemas::ErrorResponse;

/// Centralized API error type.
///
/// Every failure a handler can produce maps to one of these variants and
/// renders as the `{error, code, success: false}` JSON envelope, so no
/// endpoint ever answers with a bare string.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A required field was missing or empty.
    #[error("{0}")]
    Validation(String),
    /// The username is already registered.
    #[error("Username '{0}' already exists")]
    UsernameTaken(String),
    /// No user matches the supplied id.
    #[error("No user exists with id {0}")]
    UserNotFound(i32),
    /// Any other store failure.
    #[error("Internal server error")]
    Database(#[from] DbErr),
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::UsernameTaken(_) => StatusCode::CONFLICT,
            ApiError::UserNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "VALIDATION_ERROR",
            ApiError::UsernameTaken(_) => "USERNAME_ALREADY_EXISTS",
            ApiError::UserNotFound(_) => "USER_NOT_FOUND",
            ApiError::Database(_) => "DATABASE_ERROR",
        }
    }

    /// Classify a failed user insert. Unique-constraint violations on the
    /// username column become a conflict; everything else stays a database
    /// error.
    pub fn from_user_insert_error(db_error: DbErr, username: &str) -> Self {
        let message = db_error.to_string().to_lowercase();
        if message.contains("unique") || message.contains("constraint") {
            ApiError::UsernameTaken(username.to_string())
        } else {
            ApiError::Database(db_error)
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Database(ref db_error) = self {
            error!("request failed with database error: {}", db_error);
        }

        let body = ErrorResponse {
            error: self.to_string(),
            code: self.code().to_string(),
            success: false,
        };
        (self.status_code(), Json(body)).into_response()
    }
}
