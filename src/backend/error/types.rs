/**
 * Backend Error Types
 *
 * This module defines error types specific to the backend server.
 * These errors are used in HTTP handlers and middleware and convert
 * directly into HTTP responses.
 *
 * # Error Categories
 *
 * - `BadRequest` - malformed request shape (missing text)
 * - `Unauthorized` - missing, invalid, or expired bearer token
 * - `RateLimited` - the client exhausted its fixed-window budget
 * - `Internal` - unexpected server failure
 *
 * Remote-backend failures never appear here: the suggestion pipeline
 * recovers them internally, so a degraded suggestion is preferred to a
 * failed keystroke interaction.
 */

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Backend-specific error types
///
/// Each variant converts to a structured JSON response with the
/// matching status code.
#[derive(Debug, Error)]
pub enum BackendError {
    /// Malformed request (e.g. missing text)
    #[error("Bad request: {message}")]
    BadRequest { message: String },

    /// Missing, invalid, or expired bearer token
    #[error("Unauthorized: {message}")]
    Unauthorized { message: String },

    /// Fixed-window rate limit exceeded
    #[error("Too many requests: {message}")]
    RateLimited { message: String },

    /// Unexpected server failure
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl BackendError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    pub fn rate_limited(message: impl Into<String>) -> Self {
        Self::RateLimited {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Short error title used in the JSON body's `error` field
    pub fn title(&self) -> &'static str {
        match self {
            Self::BadRequest { .. } => "Bad Request",
            Self::Unauthorized { .. } => "Unauthorized",
            Self::RateLimited { .. } => "Too Many Requests",
            Self::Internal { .. } => "Internal Server Error",
        }
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        match self {
            Self::BadRequest { message }
            | Self::Unauthorized { message }
            | Self::RateLimited { message }
            | Self::Internal { message } => message,
        }
    }
}

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let body = json!({
            "error": self.title(),
            "message": self.message(),
        });
        (self.status_code(), Json(body)).into_response()
    }
}
