use serde::Deserialize;

use crate::models::LocationPoint;
use crate::services::items_api::DEFAULT_BASE_URL;
use crate::services::PermissionStatus;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,

    // Base URL of the items API; the items path is appended to it
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    // Coordinate reported as the device's last known location
    pub device_latitude: Option<f64>,
    pub device_longitude: Option<f64>,

    #[serde(default = "default_permission_granted")]
    pub location_permission_granted: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, envy::Error> {
        envy::from_env::<Config>()
    }

    /// Device coordinate, when both halves are configured
    pub fn device_location(&self) -> Option<LocationPoint> {
        match (self.device_latitude, self.device_longitude) {
            (Some(latitude), Some(longitude)) => Some(LocationPoint::new(latitude, longitude)),
            _ => None,
        }
    }

    pub fn location_permission(&self) -> PermissionStatus {
        if self.location_permission_granted {
            PermissionStatus::Granted
        } else {
            PermissionStatus::Denied
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: default_port(),
            api_base_url: default_api_base_url(),
            user_agent: default_user_agent(),
            device_latitude: None,
            device_longitude: None,
            location_permission_granted: default_permission_granted(),
        }
    }
}

fn default_port() -> u16 {
    3000
}

fn default_api_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_user_agent() -> String {
    format!("marker-service/{}", env!("CARGO_PKG_VERSION"))
}

fn default_permission_granted() -> bool {
    true
}
