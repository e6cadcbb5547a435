use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::handlers;
use crate::state::AppState;

/// Builds the application router. Static assets are served from `static_dir`.
pub fn router(state: Arc<AppState>, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/pet/{id}", get(handlers::pet_detail))
        .route("/api/stats", get(handlers::api_stats))
        .route("/api/pets", get(handlers::api_pets))
        .route("/api/pets/{id}", get(handlers::api_pet))
        .route("/health", get(handlers::health_check))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
