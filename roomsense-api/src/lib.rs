pub mod catalog;
pub mod classifier;
pub mod error;
pub mod history;
pub mod models;

pub use catalog::{SensorCatalog, SensorDescriptor};
pub use classifier::{Threshold, Thresholds, classify, history_band, normalized_ratio, severity};
pub use error::{ParseKindError, ThresholdError};
pub use history::History;
