use serde::{Deserialize, Serialize};

use super::{ClassifiedReading, SensorKind};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewSnapshot {
    /// Sensor the view displays
    pub kind: SensorKind,
    /// Whether the initial loading delay has elapsed
    pub ready: bool,
    /// Most recent reading, absent until the first tick
    pub current: Option<ClassifiedReading>,
    /// Progress-bar fill for the current reading in `[0, 1]`
    pub ratio: f64,
    /// Recent readings, oldest first
    pub history: Vec<ClassifiedReading>,
}
