use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::{Html, IntoResponse, Response};
use roomsense_api::SensorCatalog;
use roomsense_api::models::SensorKind;

use crate::pages;

const SENSOR_SCRIPT: &str = include_str!("../../assets/sensor.js");
const STYLESHEET: &str = include_str!("../../assets/styles.css");

#[derive(Clone)]
pub struct DashboardState {
    pub catalog: Arc<SensorCatalog>,
}

pub async fn get_dashboard(State(state): State<DashboardState>) -> Html<String> {
    Html(pages::dashboard(&state.catalog))
}

pub async fn get_sensor_page(
    Path(kind): Path<String>,
    State(state): State<DashboardState>,
) -> Response {
    match kind.parse::<SensorKind>() {
        Ok(kind) => Html(pages::sensor(state.catalog.get(kind))).into_response(),
        Err(e) => {
            tracing::debug!("{e}");
            not_found().await.into_response()
        }
    }
}

pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Html(pages::not_found()))
}

pub async fn get_script() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/javascript; charset=utf-8")], SENSOR_SCRIPT)
}

pub async fn get_stylesheet() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], STYLESHEET)
}
