use std::future::Future;

use serde::{Deserialize, Serialize};
use tokio::sync::watch;

use crate::models::LocationPoint;

/// Outcome of asking for the fine-grained location permission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PermissionStatus {
    Granted,
    Denied,
}

/// Source of the device coordinate
pub trait LocationProvider: Send + Sync + 'static {
    /// Ask for location permission. A denial is final for the session.
    fn request_permission(&self) -> impl Future<Output = PermissionStatus> + Send;

    /// Last known device coordinate, if the device has one
    fn last_known_location(&self) -> impl Future<Output = Option<LocationPoint>> + Send;
}

/// Provider answering with a fixed coordinate and permission outcome
#[derive(Debug, Clone)]
pub struct StaticLocationProvider {
    location: Option<LocationPoint>,
    permission: PermissionStatus,
}

impl StaticLocationProvider {
    pub fn new(location: Option<LocationPoint>, permission: PermissionStatus) -> Self {
        Self { location, permission }
    }

    pub fn granted(location: LocationPoint) -> Self {
        Self::new(Some(location), PermissionStatus::Granted)
    }

    pub fn denied() -> Self {
        Self::new(None, PermissionStatus::Denied)
    }
}

impl LocationProvider for StaticLocationProvider {
    async fn request_permission(&self) -> PermissionStatus {
        self.permission
    }

    async fn last_known_location(&self) -> Option<LocationPoint> {
        if self.permission == PermissionStatus::Denied {
            return None;
        }
        self.location
    }
}

/// Request permission, then publish the device coordinate at most once.
pub async fn fetch_user_location<P: LocationProvider>(
    provider: &P,
    user_location: &watch::Sender<Option<LocationPoint>>,
) {
    if provider.request_permission().await == PermissionStatus::Denied {
        tracing::warn!("Location permission denied; user location will not be available");
        return;
    }

    let Some(point) = provider.last_known_location().await else {
        tracing::warn!("No last known location available");
        return;
    };

    if !point.is_valid() {
        tracing::warn!(
            "Ignoring invalid device location ({}, {})",
            point.latitude,
            point.longitude
        );
        return;
    }

    let published = user_location.send_if_modified(|current| {
        if current.is_some() {
            return false;
        }
        *current = Some(point);
        true
    });

    if published {
        tracing::info!(
            "📍 User location available at ({}, {})",
            point.latitude,
            point.longitude
        );
    }
}
