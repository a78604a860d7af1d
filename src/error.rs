use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::engine::EngineError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),
    /// Structurally valid request carrying a snapshot the engines reject
    /// (malformed ordering, illegal transition, inconsistent sums).
    #[error("Unprocessable: {0}")]
    Unprocessable(String),
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl From<EngineError> for AppError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::InvalidCompoundingPeriods(_) => AppError::BadRequest(err.to_string()),
            EngineError::InvalidTimestampOrder { .. }
            | EngineError::InvalidTransition { .. }
            | EngineError::InconsistentRewardSnapshot { .. } => {
                AppError::Unprocessable(err.to_string())
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Unprocessable(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}
