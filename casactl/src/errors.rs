//! Application error types and their HTTP mapping.
//!
//! The error taxonomy is small: validation failures (client-caused, with
//! structured per-field detail), not-found (a normal absence outcome from the
//! repository), and internal failures (logged server-side, generic message,
//! never leaking internals).

use crate::store::errors::StoreError;
use crate::validation::ValidationIssue;
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error as ThisError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(ThisError, Debug)]
pub enum Error {
    /// Invalid request data, with one entry per violated rule
    #[error("{message}")]
    Validation {
        message: String,
        issues: Vec<ValidationIssue>,
    },

    /// Requested resource not found
    #[error("{resource} with ID {id} not found")]
    NotFound { resource: String, id: String },

    /// Store operation error
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Unexpected error with full context chain
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// Body parse failures (malformed JSON, out-of-set enum values, wrong types)
// are client errors with the same 400 shape as rule violations.
impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        Error::Validation {
            message: "Invalid request body".to_string(),
            issues: vec![ValidationIssue {
                path: "body".to_string(),
                message: rejection.body_text(),
            }],
        }
    }
}

impl Error {
    /// Validation failure for a request body.
    pub fn invalid_body(issues: Vec<ValidationIssue>) -> Self {
        Error::Validation {
            message: "Invalid request body".to_string(),
            issues,
        }
    }

    /// Validation failure for path parameters.
    pub fn invalid_params(issues: Vec<ValidationIssue>) -> Self {
        Error::Validation {
            message: "Invalid request parameters".to_string(),
            issues,
        }
    }

    /// A missing property, keyed by the id the client asked for.
    pub fn property_not_found(id: impl std::fmt::Display) -> Self {
        Error::NotFound {
            resource: "Property".to_string(),
            id: id.to_string(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::Validation { .. } => StatusCode::BAD_REQUEST,
            Error::NotFound { .. } => StatusCode::NOT_FOUND,
            Error::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Error::Other(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns a user-safe error message, without leaking internal implementation details
    pub fn user_message(&self) -> String {
        match self {
            Error::Validation { message, .. } => message.clone(),
            Error::NotFound { resource, .. } => format!("{resource} not found"),
            Error::Store(_) | Error::Other(_) => "Internal server error".to_string(),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        // Log full error details for debugging - different log levels based on severity
        match &self {
            Error::Store(_) | Error::Other(_) => {
                tracing::error!("Internal service error: {:#}", self);
            }
            Error::Validation { .. } | Error::NotFound { .. } => {
                tracing::debug!("Client error: {}", self);
            }
        }

        let status = self.status_code();

        match &self {
            // Validation failures carry the full issue list so clients can
            // surface per-field messages.
            Error::Validation { message, issues } => {
                let body = serde_json::json!({
                    "error": message,
                    "details": issues,
                });
                (status, axum::response::Json(body)).into_response()
            }
            _ => {
                let body = serde_json::json!({ "error": self.user_message() });
                (status, axum::response::Json(body)).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let validation = Error::invalid_body(vec![]);
        assert_eq!(validation.status_code(), StatusCode::BAD_REQUEST);

        let not_found = Error::property_not_found(uuid::Uuid::new_v4());
        assert_eq!(not_found.status_code(), StatusCode::NOT_FOUND);

        let store = Error::Store(StoreError::LockPoisoned);
        assert_eq!(store.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_internal_errors_never_leak_details() {
        let err = Error::Other(anyhow::anyhow!("connection refused to secret-host:5432"));
        assert_eq!(err.user_message(), "Internal server error");
    }
}
