//! Error types surfaced to HTTP callers and to process startup.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// Errors returned by request handlers. Every variant renders as
/// `{"detail": "<message>"}` with the status from [`AppError::status`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AppError {
    #[error("Authentication required")]
    Unauthenticated,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Activity not found")]
    NotFound,

    #[error("Student is already signed up")]
    AlreadyRegistered,

    #[error("Student is not signed up for this activity")]
    NotRegistered,

    #[error("{0}")]
    Validation(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Unauthenticated | AppError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::AlreadyRegistered | AppError::NotRegistered => StatusCode::BAD_REQUEST,
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    detail: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            detail: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

/// Startup failures: bad credential file, unusable bind address.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read credential file {path}: {source}")]
    ReadCredentials {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse credential file {path}: {source}")]
    ParseCredentials {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: std::net::SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_follow_error_taxonomy() {
        assert_eq!(AppError::Unauthenticated.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(AppError::InvalidCredentials.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(AppError::NotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::AlreadyRegistered.status(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::NotRegistered.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::Validation("missing email".into()).status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn detail_messages() {
        assert_eq!(AppError::NotFound.to_string(), "Activity not found");
        assert_eq!(AppError::InvalidCredentials.to_string(), "Invalid credentials");
        assert_eq!(
            AppError::NotRegistered.to_string(),
            "Student is not signed up for this activity"
        );
    }
}
