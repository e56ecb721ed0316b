use std::sync::Arc;

use serde::Serialize;

use crate::classifier::Thresholds;
use crate::models::{ColorBand, SensorKind};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SensorDescriptor {
    /// Sensor kind
    pub kind: SensorKind,
    /// Short name shown on the dashboard card
    pub name: &'static str,
    /// Heading of the detail view
    pub title: &'static str,
    /// Suffix appended to every displayed value
    pub unit: &'static str,
    /// Emoji icon
    pub icon: &'static str,
    /// Route of the detail view
    pub path: &'static str,
    /// Severity bands, highest first
    pub thresholds: Thresholds,
}

impl SensorDescriptor {
    pub fn builtin(kind: SensorKind) -> Self {
        use ColorBand::*;

        match kind {
            SensorKind::Temperature => Self {
                kind,
                name: "Temperatura",
                title: "Sensor de Temperatura",
                unit: "°C",
                icon: "🌡️",
                path: "/temperature",
                thresholds: Thresholds::from_table(&[
                    (28, "Alto", Red),
                    (25, "Medio", Yellow),
                    (23, "Normal", Blue),
                ]),
            },
            SensorKind::Noise => Self {
                kind,
                name: "Ruido",
                title: "Sensor de Ruido",
                unit: "dB",
                icon: "🔊",
                path: "/noise",
                thresholds: Thresholds::from_table(&[
                    (70, "Alto", Red),
                    (50, "Medio", Yellow),
                    (30, "Normal", Blue),
                ]),
            },
            SensorKind::Light => Self {
                kind,
                name: "Luz",
                title: "Sensor de Luz",
                unit: " lux",
                icon: "💡",
                path: "/light",
                thresholds: Thresholds::from_table(&[
                    (800, "Muy Brillante", Red),
                    (500, "Brillante", Yellow),
                    (200, "Normal", Blue),
                    (50, "Tenue", Gray),
                ]),
            },
            SensorKind::Air => Self {
                kind,
                name: "Pureza del Aire",
                title: "Sensor de Pureza del Aire",
                unit: " PPM CO2",
                icon: "🌬️",
                path: "/air",
                thresholds: Thresholds::from_table(&[
                    (1200, "Alto", Red),
                    (800, "Medio", Yellow),
                    (350, "Normal", Blue),
                ]),
            },
        }
    }

    /// Formats a value with the sensor's unit, e.g. `"27°C"` or `"640 lux"`.
    pub fn display(&self, value: u32) -> String {
        format!("{value}{}", self.unit)
    }
}

/// Descriptor table for every sensor kind, in [`SensorKind::ALL`] order.
#[derive(Debug, Clone)]
pub struct SensorCatalog {
    descriptors: Vec<Arc<SensorDescriptor>>,
}

impl SensorCatalog {
    pub fn builtin() -> Self {
        Self {
            descriptors: SensorKind::ALL
                .into_iter()
                .map(|kind| Arc::new(SensorDescriptor::builtin(kind)))
                .collect(),
        }
    }

    /// Replaces the severity bands of one sensor kind.
    pub fn with_thresholds(mut self, kind: SensorKind, thresholds: Thresholds) -> Self {
        Arc::make_mut(&mut self.descriptors[kind.index()]).thresholds = thresholds;
        self
    }

    pub fn get(&self, kind: SensorKind) -> &Arc<SensorDescriptor> {
        &self.descriptors[kind.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<SensorDescriptor>> {
        self.descriptors.iter()
    }
}

impl Default for SensorCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
