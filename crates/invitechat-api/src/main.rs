//! invitechat CLI and HTTP server entry point.
//!
//! Binary name: `invitechat`
//!
//! Parses CLI arguments, loads configuration, then either starts the widget
//! backend or runs a one-shot command.

mod cli;
mod http;
mod state;

use clap::Parser;
use secrecy::SecretString;

use cli::{Cli, Commands};
use invitechat_infra::config::load_config;
use invitechat_observe::tracing_setup::{LogOptions, init_tracing, shutdown_tracing};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "info",
        1 => "info,invitechat=debug",
        _ => "trace",
    };
    let log_options = LogOptions {
        json: cli.log_json,
        otel: cli.otel,
        ..LogOptions::new(filter)
    };
    init_tracing(&log_options)
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {e}"))?;

    let result = run(cli).await;
    shutdown_tracing();
    result
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = load_config(&cli.config).await;
    if let Some(backend) = cli.storage {
        config.storage.backend = backend;
    }
    if let Some(url) = cli.database_url {
        config.storage.database_url = url;
    }

    match cli.command {
        Commands::Serve {
            port,
            host,
            web_dir,
            api_key,
        } => {
            if let Some(port) = port {
                config.server.port = port;
            }
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(web_dir) = web_dir {
                config.server.web_dir = web_dir;
            }
            let api_key = api_key
                .filter(|key| !key.trim().is_empty())
                .map(SecretString::from);

            let state = AppState::init(&config, api_key).await?;

            let addr = format!("{}:{}", config.server.host, config.server.port);
            let listener = tokio::net::TcpListener::bind(&addr).await?;

            if !cli.quiet {
                println!(
                    "  {} invitechat listening on {}",
                    console::style("⚡").bold(),
                    console::style(format!("http://{addr}")).cyan()
                );
                println!("  {}", console::style("Press Ctrl+C to stop").dim());
            }

            let router = http::router::build_router(state, &config.server.web_dir);

            axum::serve(listener, router)
                .with_graceful_shutdown(shutdown_signal())
                .await?;

            if !cli.quiet {
                println!("\n  Server stopped.");
            }
        }

        Commands::History { session_id } => {
            cli::history::show_history(&config.storage, &session_id, cli.json).await?;
        }
    }

    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl+C");
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
                tracing::error!(error = %e, "failed to install SIGTERM handler");
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
