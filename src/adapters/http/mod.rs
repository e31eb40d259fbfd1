//! HTTP adapters - REST API implementations.

pub mod extract;
pub mod group;

pub use extract::Viewer;
pub use group::{group_router, GroupAppState};

use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

/// Full API router: group endpoints, health check, and request tracing.
pub fn api_router(state: GroupAppState) -> Router {
    group_router()
        .with_state(state)
        .route("/health", get(|| async { "ok" }))
        .layer(TraceLayer::new_for_http())
}
