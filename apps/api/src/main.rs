mod catalog;
mod config;
mod errors;
mod insights;
mod matching;
mod models;
mod profile;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::insights::remote::RemoteInsights;
use crate::insights::InsightResolver;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting career advisor v{}", env!("CARGO_PKG_VERSION"));

    let catalog = match &config.catalog_path {
        Some(path) => Catalog::from_json_file(path)?,
        None => Catalog::builtin(),
    };
    if catalog.is_empty() {
        warn!("Career catalog is empty; recommendations will be empty too");
    } else {
        info!("Career catalog loaded ({} entries)", catalog.len());
    }

    // Remote backend first; the deterministic fallback answers whenever it can't
    let insights = InsightResolver::new(Arc::new(RemoteInsights::new(
        config.gemini_api_key.clone(),
    )));
    info!(
        "Insight resolver initialized (primary: {}, key configured: {})",
        insights.primary_backend(),
        config.gemini_api_key.is_some()
    );

    let port = config.port;
    let state = AppState::new(config, catalog, insights);

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the web client has a fixed host

    let addr: SocketAddr = format!("0.0.0.0:{port}").parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
