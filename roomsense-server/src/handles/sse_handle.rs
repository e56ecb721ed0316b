use std::sync::Arc;

use axum::extract::{Path, State};
use axum::response::Sse;
use axum::response::sse::{Event, KeepAlive};
use rand::SeedableRng;
use rand::rngs::StdRng;
use roomsense_api::SensorCatalog;
use tokio_stream::{Stream, StreamExt};

use crate::errors::ApiError;
use crate::handles::sensor_handle::parse_kind;
use crate::services::{ViewSession, ViewTiming};

#[derive(Clone)]
pub struct SSEState {
    pub catalog: Arc<SensorCatalog>,
    pub timing: ViewTiming,
}

/// Opens a view session for the sensor and streams its snapshots. The session
/// and its timer end when the client disconnects.
pub async fn get_sensor_stream(
    Path(kind): Path<String>,
    State(state): State<SSEState>,
) -> Result<Sse<impl Stream<Item = Result<Event, axum::Error>>>, ApiError> {
    let kind = parse_kind(&kind)?;
    let descriptor = Arc::clone(state.catalog.get(kind));

    let session = ViewSession::open(descriptor, state.timing, StdRng::from_os_rng());
    let stream = session
        .into_stream()
        .map(|snapshot| Event::default().event("snapshot").json_data(snapshot));

    Ok(Sse::new(stream).keep_alive(KeepAlive::default()))
}
