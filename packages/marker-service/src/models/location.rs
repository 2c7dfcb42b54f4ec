use serde::{Deserialize, Deserializer, Serialize};

/// GeoJSON geometry type carried by every stored position
pub const POINT_TYPE: &str = "Point";

/// Reserved marker id for the user's own position
pub const OWN_LOCATION_ID: &str = "me";

/// Name shown in the detail dialog of the user's own marker
pub const OWN_LOCATION_NAME: &str = "Your location";

/// A device coordinate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocationPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl LocationPoint {
    /// Create a new location point
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Validate that coordinates are within valid GPS ranges
    pub fn is_valid(&self) -> bool {
        self.latitude >= -90.0 && self.latitude <= 90.0 &&
        self.longitude >= -180.0 && self.longitude <= 180.0
    }
}

/// GeoJSON-style position of a point of interest.
///
/// The API sends `coordinates` as `[longitude, latitude]`. Once a position has
/// been through `libraries::marker_mapping` it holds `[latitude, longitude]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    #[serde(rename = "type", default = "point_type")]
    pub kind: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub coordinates: Vec<f64>,
}

impl Position {
    /// Build a stored position, already in latitude/longitude order
    pub fn point(latitude: f64, longitude: f64) -> Self {
        Self {
            kind: point_type(),
            coordinates: vec![latitude, longitude],
        }
    }

    /// Latitude of a stored position
    pub fn latitude(&self) -> Option<f64> {
        match self.coordinates.as_slice() {
            &[latitude, _] => Some(latitude),
            _ => None,
        }
    }

    /// Longitude of a stored position
    pub fn longitude(&self) -> Option<f64> {
        match self.coordinates.as_slice() {
            &[_, longitude] => Some(longitude),
            _ => None,
        }
    }
}

/// One point of interest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationItem {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub position: Option<Position>,
}

/// Envelope returned by `GET /items/items`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiResponse {
    #[serde(default, deserialize_with = "lenient_items")]
    pub data: Vec<LocationItem>,
}

/// What the detail dialog shows for a tapped marker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerDetail {
    pub id: String,
    pub name: String,
    pub text: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl MarkerDetail {
    /// Build the detail view of a published marker.
    /// Returns `None` for items that were never mapped (no stored position).
    pub fn from_marker(marker: &LocationItem) -> Option<Self> {
        let position = marker.position.as_ref()?;
        Some(Self {
            id: marker.id.clone(),
            name: marker.name.clone().unwrap_or_default(),
            text: marker.text.clone().unwrap_or_default(),
            latitude: position.latitude()?,
            longitude: position.longitude()?,
        })
    }

    /// Detail view of the marker placed on the user's own position
    pub fn own_location(point: LocationPoint) -> Self {
        Self {
            id: OWN_LOCATION_ID.to_string(),
            name: OWN_LOCATION_NAME.to_string(),
            text: String::new(),
            latitude: point.latitude,
            longitude: point.longitude,
        }
    }
}

fn point_type() -> String {
    POINT_TYPE.to_string()
}

// The API sends `null` where a list is absent
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<Vec<T>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

// Entries are decoded one by one so a malformed sibling only drops itself
fn lenient_items<'de, D>(deserializer: D) -> Result<Vec<LocationItem>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Vec<serde_json::Value> = null_as_empty(deserializer)?;

    Ok(raw
        .into_iter()
        .filter_map(|value| match serde_json::from_value::<LocationItem>(value) {
            Ok(item) => Some(item),
            Err(e) => {
                tracing::debug!("Dropping malformed item: {}", e);
                None
            }
        })
        .collect())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(serde_json::Number),
}

// Ids may arrive as JSON numbers
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(id) => id,
        RawId::Number(id) => id.to_string(),
    })
}
