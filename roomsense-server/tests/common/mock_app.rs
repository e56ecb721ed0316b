use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use roomsense_api::SensorCatalog;
use roomsense_server::app::build_router;
use roomsense_server::services::ViewTiming;
use tower::ServiceExt;

pub struct MockApp {
    pub router: Router,
    pub catalog: Arc<SensorCatalog>,
}

impl MockApp {
    pub fn new() -> Self {
        let catalog = Arc::new(SensorCatalog::builtin());
        let router = build_router(catalog.clone(), ViewTiming::default());

        Self { router, catalog }
    }

    pub async fn get(&self, uri: &str) -> Response<Body> {
        let request = Request::builder()
            .uri(uri)
            .method(Method::GET)
            .body(Body::empty())
            .unwrap();

        self.router.clone().oneshot(request).await.unwrap()
    }
}

pub async fn body_string(response: Response<Body>) -> String {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    String::from_utf8(body.to_vec()).unwrap()
}
