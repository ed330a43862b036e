//! Liveness endpoint.

use axum::extract::State;
use axum::Json;

use crate::http::error::AppError;
use crate::state::AppState;

/// GET /health - Liveness probe. Fails with 500 if the database is unreachable.
pub async fn health_check(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, AppError> {
    state
        .db_pool
        .ping()
        .await
        .map_err(|e| AppError::Internal(format!("database ping failed: {e}")))?;

    Ok(Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    })))
}
