//! Router creation and configuration
//!
//! Creates the Axum router for REST API endpoints.

use super::handlers::*;
use super::types::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use std::path::Path;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Create REST API router
///
/// When `static_dir` is given and exists, requests outside `/api` are served
/// from it (`/` maps to `index.html`).
pub fn create_router(state: AppState, static_dir: Option<&Path>) -> Router {
    let router = Router::new()
        .route("/api/health", get(health))
        .route("/api/verify", post(verify))
        .route("/api/case-studies", get(case_studies))
        .route("/api/stats", get(stats))
        .with_state(state);

    let router = match static_dir {
        Some(dir) if dir.is_dir() => {
            tracing::info!("Serving static files from {}", dir.display());
            router.fallback_service(ServeDir::new(dir))
        }
        Some(dir) => {
            tracing::warn!("Static directory {} not found, frontend disabled", dir.display());
            router
        }
        None => router,
    };

    router
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
