pub mod location;
pub mod responses;

// Re-export commonly used types
pub use location::{ApiResponse, LocationItem, LocationPoint, MarkerDetail, Position};
pub use responses::{HealthResponse, ScreenSnapshot};
