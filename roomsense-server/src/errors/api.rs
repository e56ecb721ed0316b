use super::SensorError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Sensor error: {0}")]
    SensorError(#[from] SensorError),

    #[error("Internal error: {0}")]
    InternalError(#[from] anyhow::Error),
}
