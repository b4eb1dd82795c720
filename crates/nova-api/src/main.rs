//! Nova CLI and HTTP entry point.
//!
//! Binary name: `nova`
//!
//! Parses CLI arguments, sets up tracing, wires the session service to the
//! data directory, then runs a single command or starts the HTTP server.

mod cli;
mod http;
mod state;

use anyhow::Context;
use clap::Parser;
use clap_complete::generate;

use cli::{Cli, Commands};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins over this when set
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info,nova=debug",
        _ => "trace",
    };

    nova_observe::tracing_setup::init_tracing(filter, nova_observe::tracing_setup::otel_requested())
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {e}"))?;

    // Shell completions don't need app state
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "nova", &mut std::io::stdout());
        return Ok(());
    }

    let state = AppState::init(cli.data_dir.as_deref()).await?;

    let result = run(cli, state).await;
    nova_observe::tracing_setup::shutdown_tracing();
    result
}

async fn run(cli: Cli, state: AppState) -> anyhow::Result<()> {
    match cli.command {
        Commands::Ask { message } => {
            cli::conversation::ask(&state, &message.join(" "), cli.json).await?;
        }

        Commands::History => {
            cli::conversation::history(&state, cli.json).await?;
        }

        Commands::ClearHistory => {
            cli::conversation::clear_history(&state, cli.json).await?;
        }

        Commands::Journal { limit } => {
            cli::journal::journal(&state, limit, cli.json).await?;
        }

        Commands::Summarize => {
            cli::journal::summarize(&state, cli.json).await?;
        }

        Commands::Serve { host, port } => {
            let host = host.unwrap_or_else(|| state.config.server.host.clone());
            let port = port.unwrap_or(state.config.server.port);
            let addr = format!("{host}:{port}");

            let listener = tokio::net::TcpListener::bind(&addr)
                .await
                .with_context(|| format!("failed to bind {addr}"))?;

            tracing::info!(%addr, data_dir = %state.data_dir.display(), "HTTP server starting");
            if !cli.quiet {
                println!(
                    "  {} {} listening on {}",
                    console::style("⚡").bold(),
                    state.config.persona.name,
                    console::style(format!("http://{addr}")).cyan()
                );
                println!("  {}", console::style("Press Ctrl+C to stop").dim());
            }

            let router = http::router::build_router(state);

            axum::serve(listener, router)
                .with_graceful_shutdown(shutdown_signal())
                .await?;

            if !cli.quiet {
                println!("\n  Server stopped.");
            }
        }

        Commands::Completions { .. } => unreachable!("handled before state init"),
    }

    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {e}");
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
                tracing::error!("Failed to install SIGTERM handler: {e}");
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

    tracing::info!("Shutdown signal received");
}
