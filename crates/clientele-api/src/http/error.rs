//! Application error type mapping to HTTP status codes and `{message}` bodies.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use clientele_types::error::CustomerError;

use crate::http::response::ErrorBody;

pub const VALIDATION_FAILED: &str = "Validation failed, entered data is incorrect.";
pub const CUSTOMER_NOT_FOUND: &str = "Could not find customer.";
const INTERNAL_ERROR: &str = "An internal error occurred.";

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Customer service errors.
    Customer(CustomerError),
    /// Request body is not syntactically valid JSON.
    BadRequest(String),
    /// Generic internal error.
    Internal(String),
}

impl From<CustomerError> for AppError {
    fn from(e: CustomerError) -> Self {
        AppError::Customer(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::Customer(CustomerError::Validation(report)) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorBody::with_violations(VALIDATION_FAILED, report.violations),
            ),
            AppError::Customer(CustomerError::NotFound) => {
                (StatusCode::NOT_FOUND, ErrorBody::new(CUSTOMER_NOT_FOUND))
            }
            AppError::Customer(CustomerError::StorageError(detail)) => {
                tracing::error!(error = %detail, "customer storage failure");
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorBody::new(INTERNAL_ERROR))
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, ErrorBody::new(msg)),
            AppError::Internal(detail) => {
                tracing::error!(error = %detail, "internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorBody::new(INTERNAL_ERROR))
            }
        };

        (status, Json(body)).into_response()
    }
}
