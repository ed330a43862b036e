//! Infrastructure layer for Clientele.
//!
//! Contains implementations of the repository traits defined in
//! `clientele-core` (SQLite storage) and the configuration file loader.

pub mod config;
pub mod sqlite;
