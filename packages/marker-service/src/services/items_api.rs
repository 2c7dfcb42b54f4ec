use std::error::Error;

use tokio::sync::watch;

use crate::libraries::marker_mapping::map_items;
use crate::models::{ApiResponse, LocationItem};

/// Default base URL of the Utopia items API
pub const DEFAULT_BASE_URL: &str = "https://api.utopia-lab.org/";

/// Path of the items collection, relative to the base URL
pub const ITEMS_PATH: &str = "items/items";

// Expanded field selection, not requested yet:
// items/items?fields=*,to.*,relations.*,user_created.*,offers.*,needs.*,gallery.*.*

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Items API request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Items API returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to parse items response: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Client for the remote list of points of interest
#[derive(Debug, Clone)]
pub struct ItemsApi {
    client: reqwest::Client,
    base_url: String,
}

impl ItemsApi {
    pub fn new(base_url: &str, user_agent: &str) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self {
            client,
            base_url: base_url.to_string(),
        })
    }

    /// Full URL of the items collection
    pub fn items_url(&self) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), ITEMS_PATH)
    }

    /// Issue the single GET for the items envelope
    pub async fn fetch_items(&self) -> Result<ApiResponse, FetchError> {
        let url = self.items_url();
        tracing::info!("🌍 Fetching locations from {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(FetchError::Transport)?;

        if !response.status().is_success() {
            let status = response.status();
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    tracing::debug!("Failed to read error body: {}", error_chain(&e));
                    String::new()
                }
            };
            return Err(FetchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await.map_err(FetchError::Transport)?;
        serde_json::from_str(&body).map_err(FetchError::Decode)
    }
}

/// Fetch the remote list once and publish the mapped markers.
///
/// Failures are logged and the previously published list is left untouched;
/// nothing is returned to the caller.
pub async fn fetch_locations(api: &ItemsApi, markers: &watch::Sender<Vec<LocationItem>>) {
    match api.fetch_items().await {
        Ok(response) => {
            let mapped = map_items(response.data);
            tracing::info!("✅ Items API succeeded: {} locations loaded", mapped.len());
            markers.send_replace(mapped);
        }
        Err(FetchError::Status { status, body }) => {
            tracing::warn!("❌ Items API error: {} - {}", status, body);
        }
        Err(e) => {
            tracing::warn!("❌ {}", error_chain(&e));
        }
    }
}

// Log full error chain for debugging
fn error_chain(error: &dyn Error) -> String {
    let mut error_msg = error.to_string();
    let mut source = error.source();
    while let Some(err) = source {
        error_msg.push_str(&format!("\n  Caused by: {}", err));
        source = err.source();
    }
    error_msg
}
