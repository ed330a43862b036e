//! Shared domain types for Clientele.
//!
//! This crate contains the core domain types used across the service:
//! Customer, its identifier and request payload, validation reports, the
//! error taxonomy, and service configuration.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono, thiserror.

pub mod config;
pub mod customer;
pub mod error;
pub mod validation;
