use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::debug;

use crate::{
    models::{location::OWN_LOCATION_ID, LocationItem, MarkerDetail, ScreenSnapshot},
    services::MapScreen,
};

/// Everything the map needs to render: user location, markers, loading flag
pub async fn screen_snapshot(State(screen): State<Arc<MapScreen>>) -> Json<ScreenSnapshot> {
    Json(screen.snapshot())
}

pub async fn list_markers(State(screen): State<Arc<MapScreen>>) -> Json<Vec<LocationItem>> {
    Json(screen.markers())
}

/// Detail dialog content for a tapped marker.
/// The reserved id `me` is the marker on the user's own position.
pub async fn marker_detail(
    State(screen): State<Arc<MapScreen>>,
    Path(id): Path<String>,
) -> Result<Json<MarkerDetail>, StatusCode> {
    debug!("Looking up marker detail for {}", id);

    let detail = if id == OWN_LOCATION_ID {
        screen.own_location_detail()
    } else {
        screen.marker_detail(&id)
    };

    detail.map(Json).ok_or(StatusCode::NOT_FOUND)
}
