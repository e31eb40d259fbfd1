//! outing-match server - composition root.

use std::sync::Arc;

use axum::http::HeaderValue;
use tower_http::cors::CorsLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use outing_match::adapters::http::{api_router, GroupAppState};
use outing_match::adapters::InMemoryMemberStore;
use outing_match::application::{
    GetGroupResultHandler, GetPageRouteHandler, ReopenSelectionHandler, SaveProgressHandler,
    SubmitSelectionHandler,
};
use outing_match::config::{AppConfig, LoggingConfig, ServerConfig};
use outing_match::ports::MemberStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config.logging);
    config.validate()?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        environment = ?config.server.environment,
        "starting outing-match"
    );

    let store: Arc<dyn MemberStore> = Arc::new(InMemoryMemberStore::new());
    let layout = config.radar.to_layout();

    let state = GroupAppState::new(
        Arc::new(SubmitSelectionHandler::new(store.clone())),
        Arc::new(SaveProgressHandler::new(store.clone())),
        Arc::new(ReopenSelectionHandler::new(store.clone())),
        Arc::new(GetGroupResultHandler::new(store.clone(), layout)),
        Arc::new(GetPageRouteHandler::new(store)),
    );
    let app = api_router(state).layer(cors_layer(&config.server));

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "listening");

    axum::serve(listener, app).await?;
    Ok(())
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.filter));

    let registry = tracing_subscriber::registry().with(filter);
    if logging.json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    if origins.is_empty() && !server.is_production() {
        CorsLayer::permissive()
    } else {
        CorsLayer::new().allow_origin(origins)
    }
}
