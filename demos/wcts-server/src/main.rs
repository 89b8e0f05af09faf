//! WCTS demo server
//!
//! Runs the dispatcher as a persistent HTTP service instead of one
//! process per request. Unlike the CGI transport, a long-lived service
//! needs explicit request timeouts and strictly request-scoped state;
//! both are handled here (the timeout layer below, and per-request
//! `Services` construction in the handlers).
//!
//! Usage:
//!   wcts-server --listen 127.0.0.1:8080 --etc-dir /srv/wcts
//!
//! The dispatcher endpoint is `POST /wcts`; `GET /health` reports
//! service status as JSON.

mod handlers;

use anyhow::Context;
use axum::routing::{get, post};
use axum::Router;
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wcts_georef::EpsgRegistry;
use wcts_store::{CapabilitiesStore, FileFinder};

#[derive(Parser)]
#[command(name = "wcts-server")]
#[command(version)]
#[command(about = "Persistent HTTP frontend for the WCTS dispatcher")]
struct Cli {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:8080")]
    listen: SocketAddr,

    /// Extra search directory for the capabilities document; may repeat,
    /// later directories take precedence
    #[arg(long)]
    etc_dir: Vec<PathBuf>,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,
}

/// Shared backend services; all request state stays in the handlers.
pub struct AppState {
    pub registry: EpsgRegistry,
    pub store: CapabilitiesStore,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wcts_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let mut finder = FileFinder::new();
    for dir in &cli.etc_dir {
        finder.push_location(dir.clone());
    }

    let state = Arc::new(AppState {
        registry: EpsgRegistry::bundled(),
        store: CapabilitiesStore::new(finder),
    });

    let app = Router::new()
        .route("/wcts", post(handlers::wcts).get(handlers::kvp))
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(cli.timeout_secs)))
        .with_state(state);

    tracing::info!("WCTS server listening on http://{}", cli.listen);

    let listener = tokio::net::TcpListener::bind(cli.listen)
        .await
        .with_context(|| format!("failed to bind {}", cli.listen))?;
    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
