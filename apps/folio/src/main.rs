mod config;
mod content;
mod errors;
mod models;
mod render;
mod routes;
mod state;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Config, ContentConfig, DEFAULT_PORT};
use crate::content::load_page_content;
use crate::render::Views;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Folio v{}", env!("CARGO_PKG_VERSION"));
    if !config.dotenv_found {
        warn!("No .env file found, using default port {}", DEFAULT_PORT);
    }

    let content_config = ContentConfig::from_file(&config.content_config_path)?;
    info!("Content configuration: {content_config:?}");
    for key in content_config.extra.keys() {
        warn!("Ignoring unknown content config key '{key}'");
    }

    let content = load_page_content(&content_config).context("Failed to load page content")?;

    let views = Views::load(&config.templates_dir).context("Failed to load templates")?;

    let state = AppState::new(content, views);

    let app = build_router(state, &config.assets_dir).layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Could not bind {addr}"))?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
