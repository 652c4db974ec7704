//! HTTP error handling and response conversion.
//!
//! Page handlers return [`AppError`], which renders a small HTML error page.
//! JSON endpoints wrap it in [`ApiError`] so the same classification produces
//! `{"error": "..."}` bodies instead.

use crate::domain::errors::DomainError;
use crate::presentation::http::views;
use axum::{
    Json,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

/// Shown when a store constraint rejects a write; the constraint name is only logged.
pub const SAVE_FAILED_MSG: &str = "Could not save changes.";

/// Application-level errors returned from handlers.
#[derive(Debug)]
pub enum AppError {
    /// Resource not found (404).
    NotFound(String),

    /// Malformed request (400).
    BadRequest(String),

    /// Store constraint rejected the write (409). The message is shown to
    /// the caller.
    Conflict(String),

    /// Database operation failed (500).
    Database(String),

    /// Unclassified internal error (500).
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(msg) => write!(f, "Not found: {}", msg),
            Self::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            Self::Conflict(msg) => write!(f, "Conflict: {}", msg),
            Self::Database(msg) => write!(f, "Database error: {}", msg),
            Self::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Database(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// User-safe message (without implementation details).
    pub fn user_message(&self) -> String {
        match self {
            Self::NotFound(_) => "Resource not found".into(),
            Self::BadRequest(msg) => msg.clone(),
            Self::Conflict(msg) => msg.clone(),
            Self::Database(_) => "Database operation failed".into(),
            Self::Internal(_) => "Internal server error".into(),
        }
    }

    fn log(&self) {
        match self.status_code() {
            StatusCode::INTERNAL_SERVER_ERROR => tracing::error!("error={}", self),
            _ => tracing::warn!("error={}", self),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.log();
        let status = self.status_code();
        let page = views::error::error_page(status, &self.user_message());
        (status, Html(page)).into_response()
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound(msg) => AppError::NotFound(msg),
            DomainError::Invalid(errors) => AppError::BadRequest(format!(
                "Invalid fields: {}",
                errors.fields().collect::<Vec<_>>().join(", ")
            )),
            DomainError::UniqueViolation(constraint)
            | DomainError::IntegrityViolation(constraint) => {
                tracing::warn!(%constraint, "write rejected by store constraint");
                AppError::Conflict(SAVE_FAILED_MSG.into())
            }
            DomainError::InfrastructureError(msg) => {
                tracing::error!(infrastructure_error = %msg);
                AppError::Database(msg)
            }
        }
    }
}

/// Body of every JSON error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ApiErrorBody {
    pub error: String,
}

impl ApiErrorBody {
    pub fn not_logged_in() -> Self {
        Self {
            error: "Not logged in".into(),
        }
    }
}

/// JSON flavour of [`AppError`] for the `/api` endpoints.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err)
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        ApiError(AppError::from(err))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        self.0.log();
        let body = ApiErrorBody {
            error: self.0.user_message(),
        };
        (self.0.status_code(), Json(body)).into_response()
    }
}
