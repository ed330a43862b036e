//! JSON body extractor whose rejections use the API's error bodies.
//!
//! axum's own `Json` rejects with plain-text responses. `AppJson` wraps it
//! and converts the rejection into an [`AppError`]:
//! - a body that is not valid JSON is a 400;
//! - valid JSON of the wrong shape, or a missing `Content-Type:
//!   application/json`, is a 422 validation failure on the `body` field.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::Json;

use clientele_types::error::CustomerError;
use clientele_types::validation::ValidationReport;

use crate::http::error::AppError;

const MALFORMED_JSON: &str = "Malformed JSON body.";
pub const BODY_SHAPE: &str = "must be a JSON object of customer fields";

/// Drop-in replacement for `axum::Json` in handler arguments.
pub struct AppJson<T>(pub T);

impl<S, T> FromRequest<S> for AppJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(AppJson(value))
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonSyntaxError(_) => AppError::BadRequest(MALFORMED_JSON.to_string()),
            JsonRejection::JsonDataError(_) | JsonRejection::MissingJsonContentType(_) => {
                tracing::debug!(detail = %rejection.body_text(), "rejected request body");
                let mut report = ValidationReport::new();
                report.push("body", BODY_SHAPE);
                AppError::Customer(CustomerError::Validation(report))
            }
            other => AppError::BadRequest(other.body_text()),
        }
    }
}
