//! Queueing model figures

use serde::Serialize;
use utoipa::ToSchema;

use super::enums::{Direction, Zone};

/// Steady-state M/M/c figures.
///
/// Unstable systems (`rho >= 1`) carry infinite queue figures; JSON has no
/// infinity, so those fields serialize as `null`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QueueMetrics {
    /// Server utilization `lambda / (c * mu)`
    pub rho: f64,
    pub stable: bool,
    /// Erlang C probability that an arrival has to wait
    pub waiting_probability: f64,
    /// Mean queue length (passengers)
    pub lq: f64,
    /// Mean wait in queue (minutes)
    pub wq: f64,
    /// Mean number in system (passengers)
    pub l: f64,
    /// Mean time in system (minutes)
    pub w: f64,
}

impl QueueMetrics {
    pub(crate) fn unstable(rho: f64) -> Self {
        Self {
            rho,
            stable: false,
            waiting_probability: 1.0,
            lq: f64::INFINITY,
            wq: f64::INFINITY,
            l: f64::INFINITY,
            w: f64::INFINITY,
        }
    }
}

/// Heuristic crew of one zone-hour compared against the queue model
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CrossCheckRow {
    pub hour_label: String,
    pub direction: Direction,
    pub zone: Zone,
    /// Passengers left for staffed booths
    pub manual_passengers: f64,
    pub effective_service_rate: f64,
    pub heuristic_staff: u32,
    /// Smallest crew meeting the target wait (capped at the search ceiling)
    pub queue_model_staff: u32,
    /// Queue figures with the heuristic crew
    pub heuristic_metrics: QueueMetrics,
    pub meets_target: bool,
}

/// Result of cross-checking a report against the queue model
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CrossCheckReport {
    pub target_wait_minutes: f64,
    pub rows: Vec<CrossCheckRow>,
    /// Rows whose heuristic crew misses the target wait
    pub shortfalls: usize,
}
