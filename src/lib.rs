//! Checkpoint staffing server
//!
//! Estimates how many inspection staff each zone of an airport immigration
//! checkpoint needs hour by hour, flags congested hours, and exposes an
//! M/M/c queueing model for crew planning, over a REST JSON API.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let services = services::Services::new(&config.engine);
        Self {
            config: Arc::new(config),
            services: Arc::new(services),
        }
    }
}
