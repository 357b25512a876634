//! Error handling for the application

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::booking::responses::ErrorResponse;
use crate::booking::services::SaveError;
use crate::booking::validation::ValidationError;
use crate::db::StorageError;

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("Template error: {0}")]
    Template(#[from] askama::Error),
}

impl From<SaveError> for AppError {
    fn from(err: SaveError) -> Self {
        match err {
            SaveError::Validation(e) => AppError::Validation(e),
            SaveError::Storage(e) => AppError::Storage(e),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::Validation(e) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorResponse {
                    error_type: e.kind().to_string(),
                    message: e.to_string(),
                    field: Some(e.field()),
                },
            ),
            AppError::Storage(e) => {
                tracing::error!("Storage error: {}", e);
                // Shown to the clerk verbatim
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error_type: "storage".to_string(),
                        message: e.to_string(),
                        field: None,
                    },
                )
            }
            AppError::Template(e) => {
                tracing::error!("Template error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error_type: "internal".to_string(),
                        message: "Template error".to_string(),
                        field: None,
                    },
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
