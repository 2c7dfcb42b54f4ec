pub mod items_api;
pub mod location_provider;
pub mod map_screen;

pub use items_api::{fetch_locations, FetchError, ItemsApi};
pub use location_provider::{LocationProvider, PermissionStatus, StaticLocationProvider};
pub use map_screen::MapScreen;
