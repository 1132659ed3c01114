//! API error types with structured JSON responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use exosift_io::PipelineError;

/// Structured error response body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: &'static str,
    pub message: String,
}

/// API-level errors with HTTP status mapping.
#[derive(Debug)]
pub enum ApiError {
    /// Catalog file absent, as given and via the cwd fallback.
    FileNotFound(String),
    /// Mandatory catalog roles could not be resolved.
    SchemaMismatch(String),
    /// Catalog content could not be parsed.
    ParseFailure(String),
    /// Unexpected server-side failure.
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            ApiError::FileNotFound(message) => (StatusCode::NOT_FOUND, "FILE_NOT_FOUND", message),
            ApiError::SchemaMismatch(message) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "SCHEMA_MISMATCH", message)
            }
            ApiError::ParseFailure(message) => (StatusCode::BAD_REQUEST, "PARSE_ERROR", message),
            ApiError::Internal(detail) => {
                tracing::error!(%detail, "API internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = ErrorBody {
            error: ErrorDetail { code, message },
        };
        (status, Json(body)).into_response()
    }
}

impl From<PipelineError> for ApiError {
    fn from(err: PipelineError) -> Self {
        let message = err.to_string();
        match err {
            PipelineError::FileNotFound(_) => ApiError::FileNotFound(message),
            PipelineError::Parse(_) => ApiError::ParseFailure(message),
            PipelineError::Resolve(_) => ApiError::SchemaMismatch(message),
        }
    }
}
