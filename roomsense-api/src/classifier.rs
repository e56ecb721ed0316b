use serde::{Deserialize, Serialize};

use crate::error::ThresholdError;
use crate::models::ColorBand;

/// Headroom above the top band used to scale the progress bar.
const RATIO_HEADROOM: f64 = 1.2;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Threshold {
    /// Inclusive lower bound of the band
    pub lower_bound: u32,
    /// Severity label shown to the user
    pub label: String,
    /// Display color of the band
    pub band: ColorBand,
}

impl Threshold {
    pub fn new(lower_bound: u32, label: impl Into<String>, band: ColorBand) -> Self {
        Self {
            lower_bound,
            label: label.into(),
            band,
        }
    }
}

/// Non-empty threshold bands sorted strictly descending by lower bound.
///
/// The last band is the catch-all floor: values below every lower bound still
/// classify into it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Threshold>", into = "Vec<Threshold>")]
pub struct Thresholds {
    bands: Vec<Threshold>,
}

impl Thresholds {
    pub fn new(bands: Vec<Threshold>) -> Result<Self, ThresholdError> {
        let top = bands.first().ok_or(ThresholdError::Empty)?;
        if top.lower_bound == 0 {
            return Err(ThresholdError::NonPositiveTop);
        }

        for pair in bands.windows(2) {
            if pair[1].lower_bound >= pair[0].lower_bound {
                return Err(ThresholdError::NotDescending {
                    previous: pair[0].lower_bound,
                    next: pair[1].lower_bound,
                });
            }
        }

        Ok(Self { bands })
    }

    /// Builds from a compile-time table. Checked by the catalog tests.
    pub(crate) fn from_table(table: &[(u32, &str, ColorBand)]) -> Self {
        Self {
            bands: table
                .iter()
                .map(|&(lower_bound, label, band)| Threshold::new(lower_bound, label, band))
                .collect(),
        }
    }

    pub fn as_slice(&self) -> &[Threshold] {
        &self.bands
    }

    pub fn top(&self) -> &Threshold {
        &self.bands[0]
    }

    pub fn floor(&self) -> &Threshold {
        &self.bands[self.bands.len() - 1]
    }

    fn position(&self, value: u32) -> usize {
        self.bands
            .iter()
            .position(|threshold| value >= threshold.lower_bound)
            .unwrap_or(self.bands.len() - 1)
    }
}

impl TryFrom<Vec<Threshold>> for Thresholds {
    type Error = ThresholdError;

    fn try_from(bands: Vec<Threshold>) -> Result<Self, Self::Error> {
        Thresholds::new(bands)
    }
}

impl From<Thresholds> for Vec<Threshold> {
    fn from(thresholds: Thresholds) -> Self {
        thresholds.bands
    }
}

/// Returns the first band whose lower bound is met, or the floor band.
pub fn classify(value: u32, thresholds: &Thresholds) -> &Threshold {
    &thresholds.bands[thresholds.position(value)]
}

/// Severity rank of the band `value` falls into: 0 for the floor, rising
/// toward the top band.
pub fn severity(value: u32, thresholds: &Thresholds) -> usize {
    thresholds.bands.len() - 1 - thresholds.position(value)
}

/// Chip color for a history entry: red from the top band, yellow from the
/// second band, blue below that.
pub fn history_band(value: u32, thresholds: &Thresholds) -> ColorBand {
    match thresholds.bands.as_slice() {
        [top, ..] if value >= top.lower_bound => ColorBand::Red,
        [_, second, ..] if value >= second.lower_bound => ColorBand::Yellow,
        _ => ColorBand::Blue,
    }
}

/// Progress-bar fill in `[0, 1]`, relative to 120% of the top band.
pub fn normalized_ratio(value: u32, thresholds: &Thresholds) -> f64 {
    let max = f64::from(thresholds.top().lower_bound) * RATIO_HEADROOM;

    (f64::from(value) / max).min(1.0)
}
