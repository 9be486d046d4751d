//! loanforge CLI and HTTP server entry point.
//!
//! Binary name: `loanforge`
//!
//! Parses CLI arguments, sets up tracing, loads `loanforge.toml`, then
//! dispatches to a one-shot command or starts the HTTP server.

mod cli;
mod http;
mod state;

use anyhow::{Context, bail};
use clap::Parser;
use secrecy::SecretString;

use loanforge_infra::config::load_config;
use loanforge_observe::tracing_setup::{TracingOptions, init_tracing, shutdown_tracing};
use loanforge_types::config::ForgeConfig;

use cli::{Cli, Commands};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(TracingOptions {
        enable_otel: cli.otel,
        json: cli.log_json,
        verbosity: cli.verbose,
    })
    .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {e}"))?;

    let config = load_config(&cli.config).await;
    let result = run(cli, config).await;

    shutdown_tracing();
    result
}

async fn run(cli: Cli, config: ForgeConfig) -> anyhow::Result<()> {
    match cli.command {
        Commands::Prompt { style } => {
            cli::prompt::print_prompt(&config.loan, style.into());
        }

        Commands::Deploy => {
            let api_key = require_api_key(cli.api_key)?;
            let state = AppState::init(&config, &api_key)?;
            cli::deploy::run_deploy(&state).await?;
        }

        Commands::Serve { port, host } => {
            let api_key = require_api_key(cli.api_key)?;
            let state = AppState::init(&config, &api_key)?;

            let addr = format!("{host}:{port}");
            let listener = tokio::net::TcpListener::bind(&addr)
                .await
                .with_context(|| format!("failed to bind {addr}"))?;

            tracing::info!(%addr, "Server listening");
            println!(
                "  {} loanforge listening on {}",
                console::style("⚡").bold(),
                console::style(format!("http://{addr}")).cyan()
            );
            println!("  {}", console::style("Press Ctrl+C to stop").dim());

            let router = http::router::build_router(state);

            axum::serve(listener, router)
                .with_graceful_shutdown(shutdown_signal())
                .await?;

            println!("\n  Server stopped.");
        }
    }

    Ok(())
}

fn require_api_key(api_key: Option<String>) -> anyhow::Result<SecretString> {
    match api_key {
        Some(key) if !key.trim().is_empty() => Ok(SecretString::from(key)),
        _ => bail!("OPENAI_API_KEY is not set (pass --api-key or export it)"),
    }
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
