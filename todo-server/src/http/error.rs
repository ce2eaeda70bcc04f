//! API error types with IntoResponse
//!
//! Errors become plain-text responses. Store failures are logged with
//! their cause and answered with a short context message only.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::db::DbError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Malformed input or failed validation (400)
    BadRequest { message: String },

    /// Store failure (500, logged)
    Store {
        context: &'static str,
        source: DbError,
    },

    /// Store unreachable during a readiness check (503, logged)
    Unavailable { source: DbError },
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    pub fn store(context: &'static str, source: DbError) -> Self {
        Self::Store { context, source }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::Store { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Unavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            Self::BadRequest { message } => {
                tracing::warn!(%message, "rejected request");
                message
            }
            Self::Store { context, source } => {
                tracing::error!(error = %source, "{}", context);
                context.to_owned()
            }
            Self::Unavailable { source } => {
                tracing::error!(error = %source, "store ping failed");
                "database unavailable".to_owned()
            }
        };

        (status, message).into_response()
    }
}
