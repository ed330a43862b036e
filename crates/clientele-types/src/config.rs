//! Service configuration types for Clientele.
//!
//! `ServiceConfig` represents the `config.toml` in the data directory that
//! controls the listen address and the database location.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Top-level configuration for the Clientele service.
///
/// Loaded from `~/.clientele/config.toml`. All fields have sensible defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Interface to bind the HTTP listener to.
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind the HTTP listener to.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Explicit sqlx database URL. When absent the database lives in the
    /// data directory.
    #[serde(default)]
    pub database_url: Option<String>,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            database_url: None,
        }
    }
}

impl ServiceConfig {
    /// The configured database URL, or `clientele.db` inside `data_dir`.
    pub fn resolve_database_url(&self, data_dir: &Path) -> String {
        match &self.database_url {
            Some(url) => url.clone(),
            None => format!(
                "sqlite://{}?mode=rwc",
                data_dir.join("clientele.db").display()
            ),
        }
    }

    /// `host:port` socket address string.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
