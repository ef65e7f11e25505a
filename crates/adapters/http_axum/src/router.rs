//! Axum router assembly.

use axum::Router;
use axum::routing::{any, get};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::proxy;
use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// `/api/*` goes to the backend; every other path is served from the assets
/// directory, with `index.html` answering unknown paths so the dashboard's
/// own router can resolve them. Includes a [`TraceLayer`] that logs each
/// HTTP request/response at the `DEBUG` level.
pub fn build(state: AppState) -> Router {
    let index = state.assets_dir().join("index.html");
    let assets = ServeDir::new(state.assets_dir()).fallback(ServeFile::new(index));

    Router::new()
        .route("/health", get(health_check))
        .route("/api/{*path}", any(proxy::forward))
        .fallback_service(assets)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
