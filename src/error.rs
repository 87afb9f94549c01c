//! Error taxonomy and its mapping onto the HTTP wire shapes.
//!
//! Client-input problems surface as 400 with a structured body; anything
//! unexpected is logged server-side and surfaced as an opaque 500 so no
//! internal detail leaks to the client.

use axum::{Json, extract::rejection::JsonRejection, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, error};
use validator::ValidationErrors;

use crate::state::SessionError;

/// Errors that can occur in service layer operations.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The request referenced a missing or unknown session.
    #[error("invalid session")]
    InvalidSession(#[source] SessionError),
    /// Invalid input provided by the client.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// An invariant was broken while building the response.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<SessionError> for ServiceError {
    fn from(err: SessionError) -> Self {
        ServiceError::InvalidSession(err)
    }
}

/// Application-level errors that are converted to HTTP responses.
#[derive(Debug, Error)]
pub enum AppError {
    /// Body missing or unparseable.
    #[error("invalid request")]
    InvalidRequest,
    /// Session identifier absent or unknown.
    #[error("invalid session")]
    InvalidSession,
    /// Name or score missing/unusable on a score update.
    #[error("invalid data: {0}")]
    InvalidData(String),
    /// Unexpected internal failure.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::InvalidSession(_) => AppError::InvalidSession,
            ServiceError::InvalidInput(message) => AppError::InvalidData(message),
            ServiceError::Internal(message) => AppError::Internal(message),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        debug!(error = %rejection, "rejecting malformed request body");
        AppError::InvalidRequest
    }
}

impl From<ValidationErrors> for AppError {
    fn from(err: ValidationErrors) -> Self {
        AppError::InvalidData(format!("validation failed: {err}"))
    }
}

/// Body for `{"error": ...}` responses.
#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
}

/// Body for `{"status": "error", "message": ...}` responses.
#[derive(Serialize)]
struct StatusBody {
    status: &'static str,
    message: &'static str,
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        match self {
            AppError::InvalidRequest => (
                StatusCode::BAD_REQUEST,
                Json(ErrorBody {
                    error: "Invalid request",
                }),
            )
                .into_response(),
            AppError::InvalidSession => (
                StatusCode::BAD_REQUEST,
                Json(ErrorBody {
                    error: "Invalid session",
                }),
            )
                .into_response(),
            AppError::InvalidData(message) => {
                debug!(%message, "rejecting score update");
                (
                    StatusCode::BAD_REQUEST,
                    Json(StatusBody {
                        status: "error",
                        message: "Invalid data",
                    }),
                )
                    .into_response()
            }
            AppError::Internal(message) => {
                error!(%message, "internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorBody {
                        error: "Internal server error",
                    }),
                )
                    .into_response()
            }
        }
    }
}
