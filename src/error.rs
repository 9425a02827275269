//! Error types and HTTP error response handling.
//!
//! This module defines all application errors and how they are converted
//! into HTTP responses with appropriate status codes and JSON bodies.

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::store::StorageError;

/// Coarse classification of an [`AppError`].
///
/// [`ErrorKind::status`] is the only place where errors become status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Decode,
    Auth,
    Forbidden,
    NotFound,
    MethodNotAllowed,
    Store,
    Internal,
}

impl ErrorKind {
    pub fn status(self) -> StatusCode {
        match self {
            ErrorKind::Decode => StatusCode::BAD_REQUEST,
            ErrorKind::Auth => StatusCode::UNAUTHORIZED,
            ErrorKind::Forbidden => StatusCode::FORBIDDEN,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ErrorKind::Store | ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Application-wide error type.
///
/// # Error Categories
///
/// - **Decode**: malformed JSON body or path parameter
/// - **Auth**: missing, unparseable, expired or wrongly signed token
/// - **Forbidden**: valid token that belongs to a different account
/// - **NotFound**: no account at the requested id
/// - **MethodNotAllowed**: unsupported HTTP verb on a known route
/// - **Store**: any lower-level database failure
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Request body or path parameter could not be decoded.
    #[error("{0}")]
    Decode(String),

    /// Token missing or failed verification.
    #[error("{0}")]
    Auth(String),

    /// Token claim does not match the account being accessed.
    #[error("token does not grant access to account {0}")]
    Forbidden(i32),

    #[error("sorry the account with the id of {0} was not found")]
    NotFound(i32),

    #[error("method not allowed {0}")]
    MethodNotAllowed(String),

    /// Database operation failed. Details are logged, never sent to clients.
    #[error("Database error: {0}")]
    Store(#[source] sqlx::Error),

    /// Token could not be signed.
    #[error("Token error: {0}")]
    TokenIssue(#[source] jsonwebtoken::errors::Error),
}

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::Decode(_) => ErrorKind::Decode,
            AppError::Auth(_) => ErrorKind::Auth,
            AppError::Forbidden(_) => ErrorKind::Forbidden,
            AppError::NotFound(_) => ErrorKind::NotFound,
            AppError::MethodNotAllowed(_) => ErrorKind::MethodNotAllowed,
            AppError::Store(_) => ErrorKind::Store,
            AppError::TokenIssue(_) => ErrorKind::Internal,
        }
    }
}

impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::NotFound(id) => AppError::NotFound(id),
            StorageError::Database(e) => AppError::Store(e),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Decode(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::Decode(rejection.body_text())
    }
}

/// Convert AppError into an HTTP response.
///
/// # Response Format
///
/// All errors return JSON in this format:
/// ```json
/// { "Error": "Human-readable error message" }
/// ```
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let kind = self.kind();

        let message = match &self {
            AppError::Store(e) => {
                tracing::error!(error = %e, "store operation failed");
                "An internal error occurred".to_string()
            }
            AppError::TokenIssue(e) => {
                tracing::error!(error = %e, "token signing failed");
                "An internal error occurred".to_string()
            }
            other => other.to_string(),
        };

        (kind.status(), Json(json!({ "Error": message }))).into_response()
    }
}
