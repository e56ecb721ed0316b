use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use roomsense_api::models::SensorKind;
use roomsense_api::{SensorCatalog, SensorDescriptor};

use crate::errors::{ApiError, SensorError};

#[derive(Clone)]
pub struct SensorState {
    pub catalog: Arc<SensorCatalog>,
}

pub async fn get_sensors(State(state): State<SensorState>) -> Json<Vec<SensorDescriptor>> {
    Json(state.catalog.iter().map(|descriptor| SensorDescriptor::clone(descriptor)).collect())
}

pub async fn get_sensor(
    Path(kind): Path<String>,
    State(state): State<SensorState>,
) -> Result<Json<SensorDescriptor>, ApiError> {
    let kind = parse_kind(&kind)?;

    Ok(Json(SensorDescriptor::clone(state.catalog.get(kind))))
}

pub(crate) fn parse_kind(kind: &str) -> Result<SensorKind, SensorError> {
    kind.parse::<SensorKind>().map_err(|_| SensorError::SensorNotFound)
}
