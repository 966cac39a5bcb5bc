//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The preview server exposes a health check and the contact endpoints, and
//! serves everything else from the static site directory so the pages and
//! their `data/` fixtures load exactly as they would from any static host.

pub mod contact;

use std::path::Path;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// API routes plus the static site as fallback.
pub fn app(state: AppState, site_dir: &Path) -> Router {
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any);
    let site = ServeDir::new(site_dir).append_index_html_on_directories(true);

    Router::new()
        .route("/healthz", get(healthz))
        .route("/api/contact", get(contact::list).post(contact::submit))
        .layer(cors)
        .with_state(state)
        .fallback_service(site)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
