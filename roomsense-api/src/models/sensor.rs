use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::error::ParseKindError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SensorKind {
    /// Ambient temperature in Celsius
    Temperature,
    /// Noise level in decibels
    Noise,
    /// Illuminance in lux
    Light,
    /// CO2 concentration in PPM
    Air,
}

impl SensorKind {
    pub const ALL: [SensorKind; 4] = [
        SensorKind::Temperature,
        SensorKind::Noise,
        SensorKind::Light,
        SensorKind::Air,
    ];

    /// Inclusive range of values the simulator produces for this kind.
    pub const fn range(self) -> RangeInclusive<u32> {
        match self {
            SensorKind::Temperature => 23..=28,
            SensorKind::Noise => 25..=84,
            SensorKind::Light => 10..=949,
            SensorKind::Air => 300..=1399,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            SensorKind::Temperature => "temperature",
            SensorKind::Noise => "noise",
            SensorKind::Light => "light",
            SensorKind::Air => "air",
        }
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for SensorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SensorKind {
    type Err = ParseKindError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        SensorKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == value)
            .ok_or_else(|| ParseKindError(value.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorBand {
    Red,
    Yellow,
    Blue,
    Gray,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reading {
    /// Sensor that produced the value
    pub kind: SensorKind,
    /// Measured value in the sensor's unit
    pub value: u32,
    /// Generation timestamp
    #[serde(with = "time::serde::rfc3339")]
    pub recorded_at: OffsetDateTime,
}

impl Reading {
    pub fn new(kind: SensorKind, value: u32) -> Self {
        Self {
            kind,
            value,
            recorded_at: OffsetDateTime::now_utc(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedReading {
    #[serde(flatten)]
    pub reading: Reading,
    /// Label of the matched threshold band
    pub label: String,
    /// Color of the matched threshold band
    pub band: ColorBand,
    /// Color of the entry when listed in the history
    pub history_band: ColorBand,
}
