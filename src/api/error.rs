//! API error type and its HTTP mapping
//!
//! Every failure a handler can return becomes a JSON body of the form
//! `{ "message": ..., "errors"?: [...] }`. Internal causes are logged here
//! and never sent to the client.

use crate::portfolio::{schema::ValidationIssue, StorageError};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Body failed schema validation (400 with per-field issues)
    #[error("{message}")]
    Validation {
        message: &'static str,
        issues: Vec<ValidationIssue>,
    },

    /// Request is unusable for a reason other than a field check
    #[error("{0}")]
    BadRequest(&'static str),

    #[error("{0}")]
    NotFound(&'static str),

    /// Unexpected failure; `message` is what the client sees
    #[error("{message}: {source}")]
    Internal {
        message: &'static str,
        #[source]
        source: StorageError,
    },
}

impl ApiError {
    pub fn validation(message: &'static str, issues: Vec<ValidationIssue>) -> Self {
        Self::Validation { message, issues }
    }

    /// Adapter for `map_err` on storage calls
    pub fn internal(message: &'static str) -> impl FnOnce(StorageError) -> Self {
        move |source| Self::Internal { message, source }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation { .. } | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Wire shape of every error response
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<ValidationIssue>>,
}

impl ErrorBody {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            errors: None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        let body = match self {
            Self::Validation { message, issues } => {
                tracing::debug!("Rejected request body: {} ({} issues)", message, issues.len());
                ErrorBody {
                    message: message.to_string(),
                    errors: Some(issues),
                }
            }
            Self::BadRequest(message) | Self::NotFound(message) => ErrorBody::message(message),
            Self::Internal { message, source } => {
                tracing::error!("❌ {}: {}", message, source);
                ErrorBody::message(message)
            }
        };

        (status, Json(body)).into_response()
    }
}
