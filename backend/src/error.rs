//! Error handling for the POS Invoice Bridge
//!
//! All errors are translated into documented JSON envelopes at the point
//! of occurrence; driver errors are logged server-side and never shown to
//! a client.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("resource not found: {0}")]
    NotFound(String),

    /// The database cannot be reached at all; a deployment problem,
    /// not a per-request one.
    #[error("database unavailable: {0}")]
    Unavailable(String),

    #[error("database query failed: {0}")]
    Query(sqlx::Error),

    #[error("internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Query(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to show a client. Driver details stay in the logs.
    pub fn client_message(&self) -> String {
        match self {
            AppError::Unauthorized(message) => message.clone(),
            AppError::Validation(message) => message.clone(),
            AppError::NotFound(resource) => format!("{} not found", resource),
            AppError::Unavailable(_) => "Database connection is not available".to_string(),
            AppError::Query(_) | AppError::Internal(_) => "Internal server error".to_string(),
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(error: sqlx::Error) -> Self {
        match &error {
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
                AppError::Unavailable(error.to_string())
            }
            _ => AppError::Query(error),
        }
    }
}

/// Generic error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log the error for debugging
        tracing::error!("Error: {:?}", self);

        let body = ErrorResponse {
            error: self.client_message(),
        };
        (self.status(), Json(body)).into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;
