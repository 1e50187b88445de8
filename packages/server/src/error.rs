use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use common::StorageError;
use sea_orm::DbErr;
use serde::Serialize;
use thiserror::Error;

/// Uniform failure body returned by every endpoint.
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorBody {
    /// Always `false`.
    #[schema(example = false)]
    pub success: bool,
    /// Human-readable error description.
    #[schema(example = "Dish not found")]
    pub message: String,
}

/// Application-level error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Malformed body or query, or a missing / out-of-range field.
    #[error("{0}")]
    InvalidInput(String),
    /// The referenced record does not exist.
    #[error("{0}")]
    NotFound(String),
    /// Any other persistence failure. The detail is logged, never returned.
    #[error("storage failure: {0}")]
    StorageFailure(String),
}

impl AppError {
    fn status_and_body(self) -> (StatusCode, ErrorBody) {
        match self {
            AppError::InvalidInput(message) => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    success: false,
                    message,
                },
            ),
            AppError::NotFound(message) => (
                StatusCode::NOT_FOUND,
                ErrorBody {
                    success: false,
                    message,
                },
            ),
            AppError::StorageFailure(detail) => {
                tracing::error!("Storage failure: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody {
                        success: false,
                        message: "An unexpected error occurred".into(),
                    },
                )
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = self.status_and_body();
        (status, Json(body)).into_response()
    }
}

impl From<DbErr> for AppError {
    fn from(err: DbErr) -> Self {
        AppError::StorageFailure(err.to_string())
    }
}

impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::InvalidFilename(name) => {
                AppError::InvalidInput(format!("Invalid filename: {name}"))
            }
            other => AppError::StorageFailure(other.to_string()),
        }
    }
}
