use serde::{Deserialize, Serialize};

use super::location::{LocationItem, LocationPoint};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreenSnapshot {
    // Absent until permission is granted and the provider answers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_location: Option<LocationPoint>,
    pub markers: Vec<LocationItem>,
    pub loading: bool,  // the map renders only once user_location is known
}

impl ScreenSnapshot {
    pub fn new(user_location: Option<LocationPoint>, markers: Vec<LocationItem>) -> Self {
        Self {
            loading: user_location.is_none(),
            user_location,
            markers,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            service: "marker-service".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
