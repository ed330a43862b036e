//! HTTP/REST API layer for Clientele.
//!
//! Axum-based customer CRUD API with `{message, ...}` JSON bodies and
//! permissive CORS.

pub mod error;
pub mod extractors;
pub mod handlers;
pub mod response;
pub mod router;
