//! Engine parameter set

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use super::enums::Direction;

/// Per-direction processing speed of one staffed booth (passengers/hour)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRates {
    #[validate(range(exclusive_min = 0.0, message = "Service rate must be positive"))]
    pub arrival_korean: f64,
    #[validate(range(exclusive_min = 0.0, message = "Service rate must be positive"))]
    pub arrival_foreign: f64,
    #[validate(range(exclusive_min = 0.0, message = "Service rate must be positive"))]
    pub departure_korean: f64,
    #[validate(range(exclusive_min = 0.0, message = "Service rate must be positive"))]
    pub departure_foreign: f64,
    /// Throughput of one automated gate; informational
    #[validate(range(min = 0.0, message = "Auto gate rate cannot be negative"))]
    pub auto_gate: f64,
}

/// Share of foreign nationals per direction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct ForeignRatio {
    #[validate(range(min = 0.0, max = 1.0, message = "Ratio must be within [0, 1]"))]
    pub arrival: f64,
    #[validate(range(min = 0.0, max = 1.0, message = "Ratio must be within [0, 1]"))]
    pub departure: f64,
}

/// Passengers-per-hour boundaries of the alert tiers.
///
/// The classifier assumes `blue <= yellow <= orange <= red`; parameter
/// validation enforces it before a set is stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[validate(schema(function = "validate_threshold_order"))]
pub struct AlertThresholds {
    #[validate(range(min = 0.0, message = "Threshold cannot be negative"))]
    pub blue: f64,
    pub yellow: f64,
    pub orange: f64,
    pub red: f64,
}

fn validate_threshold_order(thresholds: &AlertThresholds) -> Result<(), ValidationError> {
    let ordered = thresholds.blue <= thresholds.yellow
        && thresholds.yellow <= thresholds.orange
        && thresholds.orange <= thresholds.red;
    if ordered {
        Ok(())
    } else {
        let mut error = ValidationError::new("threshold_order");
        error.message = Some("Thresholds must satisfy blue <= yellow <= orange <= red".into());
        Err(error)
    }
}

/// Fully specified engine configuration.
///
/// Engine functions never fill in defaults; callers resolve a complete set
/// (usually from the settings service) before computing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Parameters {
    /// Target fraction of booth busy time
    #[validate(range(exclusive_min = 0.0, max = 1.0, message = "Utilization must be within (0, 1]"))]
    pub target_utilization: f64,
    #[validate(nested)]
    pub service_rates: ServiceRates,
    #[validate(nested)]
    pub foreign_ratio: ForeignRatio,
    /// Share of passengers using automated gates
    #[validate(range(min = 0.0, max = 1.0, message = "Ratio must be within [0, 1]"))]
    pub auto_gate_ratio: f64,
    #[validate(nested)]
    pub alert_thresholds: AlertThresholds,
    /// Target queue wait in minutes
    #[validate(range(exclusive_min = 0.0, message = "Target wait must be positive"))]
    pub target_wait_time: f64,
}

/// Direction-resolved inputs of the per-zone staffing formula
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StaffingRates {
    pub target_utilization: f64,
    pub service_rate_korean: f64,
    pub service_rate_foreign: f64,
    pub foreign_ratio: f64,
    pub auto_gate_ratio: f64,
}

impl StaffingRates {
    /// Service rate blended by nationality mix
    pub fn effective_service_rate(&self) -> f64 {
        self.service_rate_korean * (1.0 - self.foreign_ratio)
            + self.service_rate_foreign * self.foreign_ratio
    }
}

impl Parameters {
    /// Rate pair and foreign ratio for one direction
    pub fn rates_for(&self, direction: Direction) -> StaffingRates {
        let (korean, foreign, foreign_ratio) = match direction {
            Direction::Arrival => (
                self.service_rates.arrival_korean,
                self.service_rates.arrival_foreign,
                self.foreign_ratio.arrival,
            ),
            Direction::Departure => (
                self.service_rates.departure_korean,
                self.service_rates.departure_foreign,
                self.foreign_ratio.departure,
            ),
        };

        StaffingRates {
            target_utilization: self.target_utilization,
            service_rate_korean: korean,
            service_rate_foreign: foreign,
            foreign_ratio,
            auto_gate_ratio: self.auto_gate_ratio,
        }
    }
}

/// Partial parameter update; absent fields keep their current value
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateParameters {
    pub target_utilization: Option<f64>,
    pub service_rates: Option<UpdateServiceRates>,
    pub foreign_ratio: Option<UpdateForeignRatio>,
    pub auto_gate_ratio: Option<f64>,
    pub alert_thresholds: Option<UpdateAlertThresholds>,
    pub target_wait_time: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateServiceRates {
    pub arrival_korean: Option<f64>,
    pub arrival_foreign: Option<f64>,
    pub departure_korean: Option<f64>,
    pub departure_foreign: Option<f64>,
    pub auto_gate: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateForeignRatio {
    pub arrival: Option<f64>,
    pub departure: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateAlertThresholds {
    pub blue: Option<f64>,
    pub yellow: Option<f64>,
    pub orange: Option<f64>,
    pub red: Option<f64>,
}

impl UpdateParameters {
    /// Apply this update on top of `base`, field by field
    pub fn merged_into(&self, base: &Parameters) -> Parameters {
        let mut merged = base.clone();

        if let Some(v) = self.target_utilization {
            merged.target_utilization = v;
        }
        if let Some(v) = self.auto_gate_ratio {
            merged.auto_gate_ratio = v;
        }
        if let Some(v) = self.target_wait_time {
            merged.target_wait_time = v;
        }

        if let Some(rates) = &self.service_rates {
            let target = &mut merged.service_rates;
            target.arrival_korean = rates.arrival_korean.unwrap_or(target.arrival_korean);
            target.arrival_foreign = rates.arrival_foreign.unwrap_or(target.arrival_foreign);
            target.departure_korean = rates.departure_korean.unwrap_or(target.departure_korean);
            target.departure_foreign = rates.departure_foreign.unwrap_or(target.departure_foreign);
            target.auto_gate = rates.auto_gate.unwrap_or(target.auto_gate);
        }

        if let Some(ratio) = &self.foreign_ratio {
            let target = &mut merged.foreign_ratio;
            target.arrival = ratio.arrival.unwrap_or(target.arrival);
            target.departure = ratio.departure.unwrap_or(target.departure);
        }

        if let Some(thresholds) = &self.alert_thresholds {
            let target = &mut merged.alert_thresholds;
            target.blue = thresholds.blue.unwrap_or(target.blue);
            target.yellow = thresholds.yellow.unwrap_or(target.yellow);
            target.orange = thresholds.orange.unwrap_or(target.orange);
            target.red = thresholds.red.unwrap_or(target.red);
        }

        merged
    }
}
