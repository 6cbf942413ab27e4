//! Error types for the notes API and the auth flows.
//!
//! [`ApiError`] renders as `{"error": "..."}` with a matching status code. Anything
//! that is not the caller's fault is logged and reported as a bare 500 so internal
//! details never reach the client.

use axum::{
    extract::rejection::PathRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::auth::PasswordError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    MalformedPayload(String),

    #[error("not found")]
    NotFound,

    #[error("authentication required")]
    Unauthorized,

    #[error("Session layer missing")]
    SessionUnavailable,

    #[error("Session error: {0}")]
    Session(#[from] tower_sessions::session::Error),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error(transparent)]
    Password(#[from] PasswordError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MalformedPayload(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::SessionUnavailable
            | ApiError::Session(_)
            | ApiError::Database(_)
            | ApiError::Password(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Note ids are integers; any other path segment names no note.
impl From<PathRejection> for ApiError {
    fn from(_: PathRejection) -> Self {
        ApiError::NotFound
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = if status.is_server_error() {
            tracing::error!("{}", self);
            "internal server error".to_string()
        } else {
            self.to_string()
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Outcomes of registration and login that the user gets to see.
///
/// The `Display` text of the first three variants is shown verbatim as a flash
/// message. Login never reveals whether the username exists.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Please provide username and password")]
    MissingCredentials,

    #[error("Username already exists")]
    UsernameTaken,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error(transparent)]
    Internal(#[from] ApiError),
}

impl From<sqlx::Error> for AuthError {
    fn from(e: sqlx::Error) -> Self {
        AuthError::Internal(e.into())
    }
}

impl From<PasswordError> for AuthError {
    fn from(e: PasswordError) -> Self {
        AuthError::Internal(e.into())
    }
}

impl From<tower_sessions::session::Error> for AuthError {
    fn from(e: tower_sessions::session::Error) -> Self {
        AuthError::Internal(e.into())
    }
}
