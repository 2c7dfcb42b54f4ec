use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use axum::{
    http::{header, StatusCode},
    routing::get,
    Router,
};
use marker_service::services::ItemsApi;
use serde_json::json;
use tokio::net::TcpListener;

/// Local stand-in for the remote items API
pub struct FakeItemsApi {
    pub base_url: String,
    hits: Arc<AtomicUsize>,
}

impl FakeItemsApi {
    /// Serve `body` with `status` on `GET /items/items`
    pub async fn spawn(status: StatusCode, body: String) -> Self {
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = hits.clone();

        let app = Router::new().route(
            "/items/items",
            get(move || {
                let body = body.clone();
                let counter = counter.clone();
                async move {
                    counter.fetch_add(1, Ordering::SeqCst);
                    (status, [(header::CONTENT_TYPE, "application/json")], body)
                }
            }),
        );

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{}/", addr),
            hits,
        }
    }

    pub fn client(&self) -> ItemsApi {
        ItemsApi::new(&self.base_url, "marker-service-test").unwrap()
    }

    /// Number of requests served so far
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

/// A response shaped like the live API: one complete entry, one without a
/// name or text, one without a position and one with a broken pair.
pub fn sample_items_body() -> String {
    json!({
        "data": [
            {
                "id": "garden",
                "name": "Community Garden",
                "text": "Open every Saturday",
                "position": { "type": "Point", "coordinates": [16.3738, 48.2082] },
                "user_created": { "id": "u1" }
            },
            {
                "id": "nameless",
                "name": null,
                "text": null,
                "position": { "type": "Point", "coordinates": [13.405, 52.52] }
            },
            {
                "id": "nowhere",
                "name": "No position",
                "text": "",
                "position": null
            },
            {
                "id": "broken",
                "name": "Broken pair",
                "text": "",
                "position": { "type": "Point", "coordinates": [1.0, 2.0, 3.0] }
            }
        ]
    })
    .to_string()
}
