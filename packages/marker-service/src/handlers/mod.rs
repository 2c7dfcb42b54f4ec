pub mod markers;

use std::sync::Arc;

use axum::{response::IntoResponse, routing::get, Json, Router};

use crate::{models::HealthResponse, services::MapScreen};

pub async fn health() -> impl IntoResponse {
    Json(HealthResponse::healthy())
}

/// Routes exposing the map screen state
pub fn router(screen: Arc<MapScreen>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/health", get(health))
        .route("/api/screen", get(markers::screen_snapshot))
        .route("/api/markers", get(markers::list_markers))
        .route("/api/markers/:id", get(markers::marker_detail))
        .with_state(screen)
}
