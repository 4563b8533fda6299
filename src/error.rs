/*
 * Responsibility
 * - application-wide AppError definition
 * - IntoResponse implementation (HTTP status / JSON error body)
 * - conversion of authorization denials into the unified error shape
 */
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::auth::gate::DenialReason;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: &'static str,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{code}: {message}")]
    BadRequest { code: &'static str, message: String },
    #[error("not found: {resource}")]
    NotFound { resource: &'static str },
    #[error("unauthorized: {reason}")]
    Unauthorized { reason: &'static str },
    #[error("forbidden: {reason}")]
    Forbidden { reason: &'static str },
    #[error("internal server error")]
    Internal,
}

impl AppError {
    pub fn bad_request(code: &'static str, message: impl Into<String>) -> Self {
        Self::BadRequest {
            code,
            message: message.into(),
        }
    }

    pub fn not_found(resource: &'static str) -> Self {
        Self::NotFound { resource }
    }

    pub fn unauthorized(reason: &'static str) -> Self {
        Self::Unauthorized { reason }
    }
}

impl From<DenialReason> for AppError {
    fn from(reason: DenialReason) -> Self {
        match reason {
            // Authentication failures (who are you) map to 401.
            DenialReason::MissingOrMalformedHeader | DenialReason::InvalidToken => {
                AppError::Unauthorized {
                    reason: reason.message(),
                }
            }
            // Authorization failures (you may not do this) map to 403.
            DenialReason::InsufficientPermissions => AppError::Forbidden {
                reason: reason.message(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AppError::BadRequest { code, message } => (StatusCode::BAD_REQUEST, code, message),
            AppError::NotFound { resource } => (
                StatusCode::NOT_FOUND,
                "not_found",
                format!("{resource} not found."),
            ),
            AppError::Unauthorized { reason } => {
                (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", reason.into())
            }
            AppError::Forbidden { reason } => (StatusCode::FORBIDDEN, "FORBIDDEN", reason.into()),
            AppError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_SERVER_ERROR",
                "internal server error".into(),
            ),
        };

        let body = ErrorResponse {
            error: ErrorBody { code, message },
        };

        (status, Json(body)).into_response()
    }
}
