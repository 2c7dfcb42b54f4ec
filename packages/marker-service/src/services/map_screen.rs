use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::models::{LocationItem, LocationPoint, MarkerDetail, ScreenSnapshot};
use crate::services::items_api::{fetch_locations, ItemsApi};
use crate::services::location_provider::{fetch_user_location, LocationProvider};

/// State behind the map screen.
///
/// Holds the two observable values the rendering layer reads: the user's
/// coordinate and the published markers. Each is written at most once by its
/// own background task. Dropping the screen aborts whatever is still pending.
pub struct MapScreen {
    markers: watch::Receiver<Vec<LocationItem>>,
    user_location: watch::Receiver<Option<LocationPoint>>,
    tasks: Vec<JoinHandle<()>>,
}

impl MapScreen {
    /// Start a screen load: the device lookup and the remote fetch run
    /// independently. Must be called from within a tokio runtime.
    pub fn start<P: LocationProvider>(api: ItemsApi, provider: P) -> Self {
        let (markers_tx, markers) = watch::channel(Vec::new());
        let (location_tx, user_location) = watch::channel(None);

        let location_task = tokio::spawn(async move {
            fetch_user_location(&provider, &location_tx).await;
        });

        let markers_task = tokio::spawn(async move {
            fetch_locations(&api, &markers_tx).await;
        });

        Self {
            markers,
            user_location,
            tasks: vec![location_task, markers_task],
        }
    }

    /// Current markers (empty until the fetch succeeds)
    pub fn markers(&self) -> Vec<LocationItem> {
        self.markers.borrow().clone()
    }

    /// Current device coordinate, if one has been published
    pub fn user_location(&self) -> Option<LocationPoint> {
        *self.user_location.borrow()
    }

    pub fn snapshot(&self) -> ScreenSnapshot {
        ScreenSnapshot::new(self.user_location(), self.markers())
    }

    /// Detail of the marker with the given id, as shown when it is tapped
    pub fn marker_detail(&self, id: &str) -> Option<MarkerDetail> {
        self.markers
            .borrow()
            .iter()
            .find(|marker| marker.id == id)
            .and_then(MarkerDetail::from_marker)
    }

    /// Detail of the marker on the user's own position, once it is known
    pub fn own_location_detail(&self) -> Option<MarkerDetail> {
        self.user_location().map(MarkerDetail::own_location)
    }

    pub fn subscribe_markers(&self) -> watch::Receiver<Vec<LocationItem>> {
        self.markers.clone()
    }

    pub fn subscribe_user_location(&self) -> watch::Receiver<Option<LocationPoint>> {
        self.user_location.clone()
    }

    /// Wait until both single-shot operations have finished
    pub async fn wait_until_settled(&mut self) {
        for task in self.tasks.drain(..) {
            if let Err(e) = task.await {
                if !e.is_cancelled() {
                    tracing::error!("Map screen task failed: {}", e);
                }
            }
        }
    }
}

impl Drop for MapScreen {
    fn drop(&mut self) {
        for task in &self.tasks {
            task.abort();
        }
    }
}
