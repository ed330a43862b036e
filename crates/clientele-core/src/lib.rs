//! Business logic and repository trait definitions for Clientele.
//!
//! This crate defines the "ports" (repository traits) that the infrastructure
//! layer implements, the per-field validation rules, and the customer
//! service. It depends only on `clientele-types` -- never on
//! `clientele-infra` or any database/IO crate.

pub mod repository;
pub mod service;
pub mod validation;
