//! REST API handlers.

pub mod customer;
pub mod health;
