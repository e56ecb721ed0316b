use axum::http::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum SensorError {
    #[error("Sensor not found")]
    SensorNotFound,
}

impl SensorError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            SensorError::SensorNotFound => StatusCode::NOT_FOUND,
        }
    }
}
