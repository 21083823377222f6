//! Configuration management for the checkpoint staffing server

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

use crate::models::parameters::{AlertThresholds, ForeignRatio, Parameters, ServiceRates};
use crate::services::queueing::DEFAULT_MAX_SERVERS;

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

/// Engine defaults, resolved once into a full [`Parameters`] set at startup.
///
/// Keys are snake_case here because the `config` crate folds key case; the
/// camelCase wire names only apply to the JSON API.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct EngineConfig {
    pub target_utilization: f64,
    pub arrival_korean_rate: f64,
    pub arrival_foreign_rate: f64,
    pub departure_korean_rate: f64,
    pub departure_foreign_rate: f64,
    pub auto_gate_rate: f64,
    pub arrival_foreign_ratio: f64,
    pub departure_foreign_ratio: f64,
    pub auto_gate_ratio: f64,
    pub target_wait_minutes: f64,
    pub blue_threshold: f64,
    pub yellow_threshold: f64,
    pub orange_threshold: f64,
    pub red_threshold: f64,
    /// Ceiling for the minimum-server search
    pub max_servers: u32,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub engine: EngineConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default"))
            // Layer on the environment-specific file
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add environment variables (e.g. CHECKPOINT_ENGINE__MAX_SERVERS)
            .add_source(
                Environment::with_prefix("CHECKPOINT")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            // Override listening port from PORT env var if present
            .set_override_option("server.port", env::var("PORT").ok())?
            .build()?;

        config.try_deserialize()
    }
}

impl EngineConfig {
    /// Full parameter set used whenever a caller does not supply its own
    pub fn default_parameters(&self) -> Parameters {
        Parameters {
            target_utilization: self.target_utilization,
            service_rates: ServiceRates {
                arrival_korean: self.arrival_korean_rate,
                arrival_foreign: self.arrival_foreign_rate,
                departure_korean: self.departure_korean_rate,
                departure_foreign: self.departure_foreign_rate,
                auto_gate: self.auto_gate_rate,
            },
            foreign_ratio: ForeignRatio {
                arrival: self.arrival_foreign_ratio,
                departure: self.departure_foreign_ratio,
            },
            auto_gate_ratio: self.auto_gate_ratio,
            alert_thresholds: AlertThresholds {
                blue: self.blue_threshold,
                yellow: self.yellow_threshold,
                orange: self.orange_threshold,
                red: self.red_threshold,
            },
            target_wait_time: self.target_wait_minutes,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            target_utilization: 0.85,
            arrival_korean_rate: 60.0,
            arrival_foreign_rate: 40.0,
            departure_korean_rate: 70.0,
            departure_foreign_rate: 50.0,
            auto_gate_rate: 120.0,
            arrival_foreign_ratio: 0.6,
            departure_foreign_ratio: 0.3,
            auto_gate_ratio: 0.3,
            target_wait_minutes: 15.0,
            blue_threshold: 7000.0,
            yellow_threshold: 7600.0,
            orange_threshold: 8200.0,
            red_threshold: 8600.0,
            max_servers: DEFAULT_MAX_SERVERS,
        }
    }
}
