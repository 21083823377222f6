//! Settings service: the current engine parameter set

use std::sync::Arc;

use tokio::sync::RwLock;
use validator::Validate;

use crate::{
    error::AppResult,
    models::parameters::{Parameters, UpdateParameters},
};

/// Holds the parameter set used when a request does not bring its own.
///
/// Readers get a copy, so an update never changes a computation already in
/// flight.
#[derive(Clone)]
pub struct SettingsService {
    defaults: Arc<Parameters>,
    current: Arc<RwLock<Parameters>>,
}

impl SettingsService {
    pub fn new(defaults: Parameters) -> Self {
        Self {
            current: Arc::new(RwLock::new(defaults.clone())),
            defaults: Arc::new(defaults),
        }
    }

    /// Get current settings
    pub async fn get_settings(&self) -> Parameters {
        self.current.read().await.clone()
    }

    /// Merge a partial update into the current settings.
    ///
    /// The merged set is validated first; on error nothing changes.
    pub async fn update_settings(&self, request: UpdateParameters) -> AppResult<Parameters> {
        let mut current = self.current.write().await;

        let merged = request.merged_into(&current);
        merged.validate()?;

        *current = merged.clone();
        tracing::info!(
            target_utilization = merged.target_utilization,
            auto_gate_ratio = merged.auto_gate_ratio,
            "Settings updated"
        );

        Ok(merged)
    }

    /// Restore the configured defaults
    pub async fn reset_settings(&self) -> Parameters {
        let mut current = self.current.write().await;
        *current = (*self.defaults).clone();
        tracing::info!("Settings reset to defaults");
        current.clone()
    }

    /// Request parameters if supplied (validated), the current settings otherwise
    pub async fn resolve(&self, supplied: Option<Parameters>) -> AppResult<Parameters> {
        match supplied {
            Some(params) => {
                params.validate()?;
                Ok(params)
            }
            None => Ok(self.get_settings().await),
        }
    }
}
