use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use roomsense_api::models::{Reading, SensorKind};

/// Uniform integer sensor values over each kind's fixed range.
pub struct Simulator<R = StdRng> {
    rng: R,
}

impl Simulator<StdRng> {
    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Simulator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn generate(&mut self, kind: SensorKind) -> u32 {
        let value = self.rng.random_range(kind.range());

        tracing::trace!("Simulated {kind}: {value}");

        value
    }

    pub fn reading(&mut self, kind: SensorKind) -> Reading {
        Reading::new(kind, self.generate(kind))
    }
}
