//! Business logic services

pub mod alerts;
pub mod queueing;
pub mod settings;
pub mod staffing;

use crate::config::EngineConfig;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub staffing: staffing::StaffingService,
    pub queue: queueing::QueueService,
    pub settings: settings::SettingsService,
}

impl Services {
    /// Create all services from the engine configuration
    pub fn new(engine_config: &EngineConfig) -> Self {
        Self {
            staffing: staffing::StaffingService::new(),
            queue: queueing::QueueService::new(engine_config.max_servers),
            settings: settings::SettingsService::new(engine_config.default_parameters()),
        }
    }
}
