//! CLI command definitions for the `clientele` binary.
//!
//! Uses clap derive macros for argument parsing. `serve` runs the REST API;
//! the remaining commands work on the customer store directly.

pub mod customer;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use clientele_observe::tracing_setup::LogFormat;

/// Customer records over a small REST API.
#[derive(Parser)]
#[command(name = "clientele", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Log line format: `text` or `json`.
    #[arg(long, global = true, env = "CLIENTELE_LOG_FORMAT", default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    /// Export tracing spans through OpenTelemetry (stdout exporter).
    #[arg(long, global = true, env = "CLIENTELE_OTEL")]
    pub otel: bool,

    /// sqlx database URL. Overrides `database_url` in config.toml.
    #[arg(long, global = true, env = "CLIENTELE_DATABASE_URL")]
    pub database_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the REST API server.
    Serve {
        /// Port to listen on. Overrides `port` in config.toml.
        #[arg(short, long, env = "CLIENTELE_PORT")]
        port: Option<u16>,

        /// Host to bind to. Overrides `host` in config.toml.
        #[arg(long, env = "CLIENTELE_HOST")]
        host: Option<String>,
    },

    /// List all customers.
    #[command(alias = "ls")]
    List,

    /// Show details of a customer.
    Show {
        /// Customer ID.
        id: String,
    },

    /// Delete a customer.
    #[command(alias = "rm")]
    Delete {
        /// Customer ID.
        id: String,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}
