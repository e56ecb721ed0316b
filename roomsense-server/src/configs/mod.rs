pub mod settings;

pub use settings::{Dashboard, Logger, SensorOverrides, Server, Settings};
