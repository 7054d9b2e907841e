mod catalog;
mod config;
mod errors;
mod recommendation;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::JobCatalog;
use crate::config::Config;
use crate::recommendation::scoring::ExactSkillMatcher;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting JobRec API v{}", env!("CARGO_PKG_VERSION"));

    // Load the job catalog into memory; it stays read-only for the process lifetime
    let catalog = Arc::new(JobCatalog::load(&config.catalog_path)?);
    if catalog.is_empty() {
        warn!("Job catalog is empty; every request will return zero recommendations");
    }

    // Skill equivalence used by the scorer. Exact normalized-string equality;
    // swap the implementation here to plug in richer matching.
    let matcher = Arc::new(ExactSkillMatcher);
    info!("Skill matcher initialized (exact equality)");

    // Build app state
    let state = AppState {
        catalog,
        config: config.clone(),
        matcher,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // JSON API is consumed by a separate frontend

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
