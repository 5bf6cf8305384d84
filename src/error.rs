//! Error types for the LabTrack server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    /// Delete blocked by dependent rows. `details` carries the per-type
    /// dependent counts so the caller knows what to reassign first.
    #[error("{message}")]
    InUse {
        message: String,
        details: serde_json::Value,
    },

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, message, details) = match self {
            AppError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, "validation", msg, None)
            }
            AppError::NotFound(msg) => {
                (StatusCode::NOT_FOUND, "not_found", msg, None)
            }
            AppError::InUse { message, details } => {
                (StatusCode::BAD_REQUEST, "in_use", message, Some(details))
            }
            AppError::Conflict(msg) => {
                (StatusCode::CONFLICT, "conflict", msg, None)
            }
            AppError::Unauthorized(msg) => {
                (StatusCode::UNAUTHORIZED, "unauthorized", msg, None)
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "database",
                    "Internal server error".to_string(),
                    None,
                )
            }
            AppError::Storage(e) => {
                tracing::error!("Storage error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "storage",
                    "Internal server error".to_string(),
                    None,
                )
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal",
                    "Internal server error".to_string(),
                    None,
                )
            }
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
            message,
            details,
        });

        (status, body).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

/// Attach the failing operation to a database error before it propagates.
/// The HTTP body stays generic; the log carries the query context.
pub(crate) trait DbContext<T> {
    fn db_context(self, operation: &'static str) -> AppResult<T>;
}

impl<T> DbContext<T> for Result<T, sqlx::Error> {
    fn db_context(self, operation: &'static str) -> AppResult<T> {
        self.map_err(|e| {
            tracing::error!(operation, error = %e, "Database query failed");
            AppError::Database(e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn db_context_wraps_query_failures() {
        let result: AppResult<()> = Err(sqlx::Error::PoolTimedOut).db_context("rooms.list");
        assert!(matches!(result, Err(AppError::Database(_))));
    }

    #[test]
    fn db_context_passes_success_through() {
        let result: AppResult<i32> = Ok(7).db_context("rooms.list");
        assert_eq!(result.unwrap(), 7);
    }
}
