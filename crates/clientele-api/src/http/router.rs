//! Axum router configuration with middleware.
//!
//! Customer routes live under `/customer/`; `/health` sits at the root.
//! Middleware: CORS, request tracing.

use axum::http::{header, Method};
use axum::routing::{delete, get, patch, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete API router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::OPTIONS,
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    let customer_routes = Router::new()
        .route("/getAll", get(handlers::customer::get_customers))
        .route("/create", post(handlers::customer::create_customer))
        .route("/get/{id}", get(handlers::customer::get_customer))
        .route("/update/{id}", patch(handlers::customer::update_customer))
        .route("/delete/{id}", delete(handlers::customer::delete_customer));

    Router::new()
        .nest("/customer", customer_routes)
        .route("/health", get(handlers::health::health_check))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
