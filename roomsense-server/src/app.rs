use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use roomsense_api::SensorCatalog;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::configs::Settings;
use crate::handles::*;
use crate::services::ViewTiming;

pub fn create_app(settings: &Arc<Settings>) -> Router {
    build_router(Arc::new(settings.catalog()), settings.dashboard.timing())
}

pub fn build_router(catalog: Arc<SensorCatalog>, timing: ViewTiming) -> Router {
    let sensors = Router::new()
        .route("/", get(get_sensors))
        .route("/:kind", get(get_sensor))
        .with_state(SensorState {
            catalog: catalog.clone(),
        })
        .merge(
            Router::new()
                .route("/:kind/stream", get(get_sensor_stream))
                .with_state(SSEState {
                    catalog: catalog.clone(),
                    timing,
                }),
        );

    let assets = Router::new()
        .route("/sensor.js", get(get_script))
        .route("/styles.css", get(get_stylesheet));

    let pages = Router::new()
        .route("/", get(get_dashboard))
        .route("/:kind", get(get_sensor_page))
        .with_state(DashboardState {
            catalog: catalog.clone(),
        });

    Router::new()
        .nest("/api/sensors", sensors)
        .nest("/assets", assets)
        .merge(pages)
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
