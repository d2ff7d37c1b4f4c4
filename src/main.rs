//! Portfolio site - Rust implementation
//!
//! Usage:
//!   portfolio-site [serve]        preview the site on http://0.0.0.0:<port>
//!   portfolio-site export <dir>   write the static site to <dir>

use portfolio_site::{api, config, export, ui};

use anyhow::Result;
use axum::{routing::get, Router};
use std::net::SocketAddr;
use std::path::PathBuf;
use tokio::signal;
use tower_http::{compression::CompressionLayer, services::ServeDir, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

enum Command {
    Serve,
    Export(PathBuf),
}

fn parse_args() -> Option<Command> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        None | Some("serve") => Some(Command::Serve),
        Some("export") => args.get(1).map(|dir| Command::Export(PathBuf::from(dir))),
        _ => None,
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "portfolio_site=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let Some(command) = parse_args() else {
        eprintln!("Usage: portfolio-site [serve | export <dir>]");
        std::process::exit(2);
    };

    tracing::info!(
        "Portfolio site v{} ({})",
        env!("PORTFOLIO_VERSION"),
        env!("PORTFOLIO_GIT_SHA")
    );

    // Load configuration
    let config = config::load_config()?;
    tracing::info!(
        "Configuration loaded, variant: {}, port: {}",
        config.variant.as_str(),
        config.port
    );

    match command {
        Command::Export(dir) => {
            export::export_site(&config, &dir)?;
            Ok(())
        }
        Command::Serve => serve(config).await,
    }
}

async fn serve(config: config::SiteConfig) -> Result<()> {
    let port = config.port;
    let pkg_dir = config.pkg_dir.clone();
    let state = api::AppState::new(config);

    let app = Router::new()
        // Page
        .route("/", get(ui::home_page))
        // Health check
        .route("/status", get(api::status_handler))
        // Embedded assets
        .route("/assets/{*path}", get(api::asset_handler))
        // wasm-pack output
        .nest_service("/pkg", ServeDir::new(&pkg_dir))
        // Middleware
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    if !std::path::Path::new(&pkg_dir).is_dir() {
        tracing::warn!(
            "No wasm build at {}; run `wasm-pack build --target web --no-default-features`",
            pkg_dir
        );
    }

    // Start server with graceful shutdown
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Previewing on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down..."),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down..."),
    }
}
