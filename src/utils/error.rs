use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;

use crate::db::table_store::StorageError;

/// Body for every non-success response, matching the shape the voting form
/// expects.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid vote option: {0}")]
    InvalidOption(String),

    #[error("You have already voted in this election")]
    DuplicateVote,

    #[error("Storage request timed out, please try again")]
    StorageTimeout,

    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Timeout => AppError::StorageTimeout,
            StorageError::Unavailable(msg) => AppError::StorageUnavailable(msg),
            // Conditional-insert conflicts are handled where the write
            // happens; one leaking this far means a key invariant broke.
            StorageError::AlreadyExists => {
                AppError::Internal("unexpected write conflict".to_string())
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::MissingField(_) | AppError::InvalidOption(_) | AppError::DuplicateVote => {
                StatusCode::BAD_REQUEST
            }
            AppError::StorageTimeout | AppError::StorageUnavailable(_) => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let message = match &self {
            AppError::Internal(msg) => {
                error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }
            AppError::StorageUnavailable(msg) => {
                error!("Storage unavailable: {}", msg);
                self.to_string()
            }
            _ => self.to_string(),
        };

        (
            status,
            Json(ErrorResponse {
                success: false,
                message,
            }),
        )
            .into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
