//! Clientele CLI and REST API entry point.
//!
//! Binary name: `clientele`
//!
//! Parses CLI arguments, loads configuration, opens the database, then
//! dispatches to a command handler or starts the REST API server.

mod cli;
mod http;
mod state;

use clap::Parser;
use clap_complete::generate;

use clientele_infra::config::{load_service_config, resolve_data_dir};
use clientele_observe::tracing_setup::{init_tracing, shutdown_tracing, TracingOptions};

use cli::{Cli, Commands};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info,clientele=debug",
        _ => "trace",
    };
    init_tracing(&TracingOptions {
        directives: filter,
        format: cli.log_format,
        otel: cli.otel,
    })
    .map_err(|e| anyhow::anyhow!("failed to init tracing: {e}"))?;

    let result = run(cli).await;
    shutdown_tracing();
    result
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    // Shell completions don't need config or the database
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "clientele", &mut std::io::stdout());
        return Ok(());
    }

    let data_dir = resolve_data_dir();
    let mut config = load_service_config(&data_dir).await;
    if let Some(url) = cli.database_url {
        config.database_url = Some(url);
    }

    let state = AppState::init(&config.resolve_database_url(&data_dir), &data_dir).await?;

    match cli.command {
        Commands::List => {
            cli::customer::list_customers(&state, cli.json).await?;
        }

        Commands::Show { id } => {
            cli::customer::show_customer(&state, &id, cli.json).await?;
        }

        Commands::Delete { id } => {
            cli::customer::delete_customer(&state, &id, cli.json).await?;
        }

        Commands::Serve { port, host } => {
            if let Some(port) = port {
                config.port = port;
            }
            if let Some(host) = host {
                config.host = host;
            }

            let addr = config.listen_addr();
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            tracing::info!(%addr, "customer API listening");

            if !cli.quiet {
                println!(
                    "  {} Clientele API listening on {}",
                    console::style("⚡").bold(),
                    console::style(format!("http://{addr}")).cyan()
                );
                println!("  {}", console::style("Press Ctrl+C to stop").dim());
            }

            let db_pool = state.db_pool.clone();
            let router = http::router::build_router(state);

            axum::serve(listener, router)
                .with_graceful_shutdown(shutdown_signal())
                .await?;

            db_pool.close().await;
            tracing::info!("server stopped");
            if !cli.quiet {
                println!("\n  Server stopped.");
            }
        }

        Commands::Completions { .. } => unreachable!("handled above"),
    }

    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for Ctrl+C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
