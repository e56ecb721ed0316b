use std::env;
use std::time::Duration;

use config::{Config, ConfigError, Environment, File};
use roomsense_api::history::DEFAULT_CAPACITY;
use roomsense_api::models::SensorKind;
use roomsense_api::{SensorCatalog, Thresholds};
use serde::{Deserialize, Serialize};

use crate::services::ViewTiming;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Server {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Logger {
    pub level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Dashboard {
    pub tick_interval_ms: u64,
    pub loading_delay_ms: u64,
    pub history_capacity: usize,
}

impl Default for Dashboard {
    fn default() -> Self {
        Self {
            tick_interval_ms: 4000,
            loading_delay_ms: 1000,
            history_capacity: DEFAULT_CAPACITY,
        }
    }
}

impl Dashboard {
    pub fn timing(&self) -> ViewTiming {
        ViewTiming {
            tick_interval: Duration::from_millis(self.tick_interval_ms),
            loading_delay: Duration::from_millis(self.loading_delay_ms),
            history_capacity: self.history_capacity,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SensorOverride {
    pub thresholds: Thresholds,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SensorOverrides {
    pub temperature: Option<SensorOverride>,
    pub noise: Option<SensorOverride>,
    pub light: Option<SensorOverride>,
    pub air: Option<SensorOverride>,
}

impl SensorOverrides {
    pub fn get(&self, kind: SensorKind) -> Option<&SensorOverride> {
        match kind {
            SensorKind::Temperature => self.temperature.as_ref(),
            SensorKind::Noise => self.noise.as_ref(),
            SensorKind::Light => self.light.as_ref(),
            SensorKind::Air => self.air.as_ref(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub server: Server,
    pub logger: Logger,
    #[serde(default)]
    pub dashboard: Dashboard,
    #[serde(default)]
    pub sensors: SensorOverrides,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or("development".into());

        let config = Config::builder()
            .add_source(File::with_name("configs/default"))
            .add_source(File::with_name(&format!("configs/{run_mode}")).required(false))
            .add_source(Environment::default().separator("__"))
            .build()?;

        Self::from_config(config)
    }

    pub fn from_config(config: Config) -> Result<Self, ConfigError> {
        let settings: Settings = config.try_deserialize()?;

        if settings.dashboard.tick_interval_ms == 0 {
            return Err(ConfigError::Message(
                "dashboard.tick_interval_ms must be greater than zero".into(),
            ));
        }

        if settings.dashboard.history_capacity == 0 {
            return Err(ConfigError::Message(
                "dashboard.history_capacity must be greater than zero".into(),
            ));
        }

        Ok(settings)
    }

    /// Built-in descriptor table with configured threshold overrides applied.
    pub fn catalog(&self) -> SensorCatalog {
        SensorKind::ALL
            .into_iter()
            .fold(SensorCatalog::builtin(), |catalog, kind| {
                match self.sensors.get(kind) {
                    Some(custom) => {
                        tracing::info!("Using configured thresholds for {kind}");
                        catalog.with_thresholds(kind, custom.thresholds.clone())
                    }
                    None => catalog,
                }
            })
    }
}
