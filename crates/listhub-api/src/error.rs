//! Maps domain `AppError` to HTTP responses.

use axum::Json;
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use validator::ValidationErrors;

use listhub_core::error::{AppError, ErrorKind};

/// Error body returned by every endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Machine-readable error code.
    pub error: String,
    /// Human-readable message.
    pub detail: String,
}

/// Status code and error code for an error kind.
pub fn status_for(kind: ErrorKind) -> (StatusCode, &'static str) {
    match kind {
        ErrorKind::Validation => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
        ErrorKind::Conflict => (StatusCode::BAD_REQUEST, "CONFLICT"),
        ErrorKind::Authentication => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED"),
        ErrorKind::Authorization => (StatusCode::FORBIDDEN, "FORBIDDEN"),
        ErrorKind::NotFound => (StatusCode::NOT_FOUND, "NOT_FOUND"),
        ErrorKind::Storage => (StatusCode::INTERNAL_SERVER_ERROR, "STORAGE_ERROR"),
        ErrorKind::Database => (StatusCode::INTERNAL_SERVER_ERROR, "DATABASE_ERROR"),
        ErrorKind::Internal | ErrorKind::Configuration | ErrorKind::Serialization => {
            (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")
        }
    }
}

/// Result type returned by handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// Wrapper so `AppError` (defined in `listhub-core`) can be returned from handlers.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        Self(AppError::validation(describe_validation_errors(&errors)))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        let (status, code) = status_for(err.kind);

        if status.is_server_error() {
            tracing::error!(kind = %err.kind, error = %err.message, source = ?err.source, "Request failed");
        }

        let body = ApiErrorResponse {
            error: code.to_string(),
            detail: err.message,
        };

        let mut response = (status, Json(body)).into_response();
        if status == StatusCode::UNAUTHORIZED {
            response
                .headers_mut()
                .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
        }
        response
    }
}

/// Flatten field errors into `field: message; field: message`.
fn describe_validation_errors(errors: &ValidationErrors) -> String {
    let mut parts: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match &e.message {
                Some(message) => format!("{field}: {message}"),
                None => format!("{field}: invalid value ({})", e.code),
            })
        })
        .collect();
    parts.sort();

    if parts.is_empty() {
        "Invalid request".to_string()
    } else {
        parts.join("; ")
    }
}
