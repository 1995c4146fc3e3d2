//! Oracle-specific error types
//!
//! Every request-level failure is funnelled through `IntoResponse` below,
//! which is the only place an error kind is turned into an HTTP status.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use shared::{ServiceId, SharedError, service_warn};
use thiserror::Error;

use crate::types::ApiResponse;

#[derive(Error, Debug)]
pub enum OracleError {
    #[error("Malformed request body: {details}")]
    MalformedBody { details: String },

    #[error("missing field `{field}`")]
    MissingField { field: &'static str },

    #[error("field `{field}` must be {expected}")]
    InvalidField {
        field: &'static str,
        expected: &'static str,
    },

    #[error("Complexity must be positive, got {complexity}")]
    InvalidComplexity { complexity: i64 },

    #[error("Not found: {path}")]
    NotFound { path: String },

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Server startup error: {0}")]
    ServerStartup(String),

    #[error("Shared component error: {0}")]
    Shared(#[from] SharedError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl OracleError {
    pub fn internal(message: impl Into<String>) -> Self {
        OracleError::Internal(message.into())
    }

    /// HTTP status for this error kind.
    ///
    /// Client-input and internal failures share 400; only routing errors
    /// get their own status.
    pub fn status_code(&self) -> StatusCode {
        match self {
            OracleError::NotFound { .. } => StatusCode::NOT_FOUND,
            OracleError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            OracleError::MalformedBody { .. }
            | OracleError::MissingField { .. }
            | OracleError::InvalidField { .. }
            | OracleError::InvalidComplexity { .. }
            | OracleError::Internal(_)
            | OracleError::ServerStartup(_)
            | OracleError::Shared(_)
            | OracleError::Io(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl From<JsonRejection> for OracleError {
    fn from(rejection: JsonRejection) -> Self {
        OracleError::MalformedBody {
            details: rejection.body_text(),
        }
    }
}

impl IntoResponse for OracleError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.to_string();

        service_warn!(
            ServiceId::current(),
            status = status.as_u16(),
            "⚠️ Request failed: {}",
            message
        );

        (status, Json(ApiResponse::<()>::error(message))).into_response()
    }
}

pub type OracleResult<T> = Result<T, OracleError>;
