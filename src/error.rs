//! Application error type and HTTP response mapping.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Machine-readable error payload embedded in every error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

/// Application-level error returned by services and handlers.
///
/// Each variant maps to one HTTP status and a stable `error.code` string,
/// so the transport layer never has to interpret messages.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Request or domain validation failure (400).
    #[error("{message}")]
    Validation { message: String, details: Value },
    /// A referenced entity (station) id did not resolve (404).
    #[error("{message}")]
    EntityNotFound { message: String, details: Value },
    /// A referenced line id did not resolve (404). Carries the offending id.
    #[error("Line not found: {id}")]
    LineNotFound { id: i64 },
    /// Unique constraint or duplicate resource (409).
    #[error("{message}")]
    Conflict { message: String, details: Value },
    /// Unexpected failure, details withheld from clients (500).
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn entity_not_found(message: impl Into<String>, details: Value) -> Self {
        Self::EntityNotFound {
            message: message.into(),
            details,
        }
    }

    pub fn line_not_found(id: i64) -> Self {
        Self::LineNotFound { id }
    }

    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// Converts this error into the payload shape used inside response bodies.
    pub fn to_error_info(&self) -> ErrorInfo {
        let (code, message, details) = self.parts();
        ErrorInfo {
            code,
            message,
            details,
        }
    }

    fn parts(&self) -> (&'static str, String, Value) {
        match self {
            AppError::Validation { message, details } => {
                ("validation_error", message.clone(), details.clone())
            }
            AppError::EntityNotFound { message, details } => {
                ("entity_not_found", message.clone(), details.clone())
            }
            AppError::LineNotFound { id } => (
                "line_not_found",
                format!("Line not found: {id}"),
                json!({ "id": id }),
            ),
            AppError::Conflict { message, details } => {
                ("conflict", message.clone(), details.clone())
            }
            AppError::Internal { message, details } => {
                ("internal_error", message.clone(), details.clone())
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::EntityNotFound { .. } | AppError::LineNotFound { .. } => {
                StatusCode::NOT_FOUND
            }
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error() {
            if db.is_unique_violation() {
                return AppError::conflict(
                    "Unique constraint violation",
                    json!({ "constraint": db.constraint() }),
                );
            }
            if db.is_foreign_key_violation() {
                return AppError::conflict(
                    "Foreign key violation",
                    json!({ "constraint": db.constraint() }),
                );
            }
        }

        tracing::error!(error = %e, "Database error");
        AppError::internal("Database error", json!({}))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        AppError::bad_request(
            "Request validation failed",
            serde_json::to_value(&e).unwrap_or_else(|_| json!({})),
        )
    }
}
