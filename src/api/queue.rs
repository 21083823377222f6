//! Queue model endpoints

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{error::AppResult, models::queue::QueueMetrics};

/// M/M/c metrics request
#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MetricsRequest {
    /// Arrival rate (passengers/hour)
    pub lambda: f64,
    /// Service rate per server (passengers/hour)
    pub mu: f64,
    /// Number of servers
    pub servers: u32,
}

/// Minimum crew request
#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MinimumServersRequest {
    pub lambda: f64,
    pub mu: f64,
    /// Target mean queue wait in minutes; defaults to the current settings
    pub target_wait_minutes: Option<f64>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MinimumServersResponse {
    pub servers: u32,
    pub target_wait_minutes: f64,
    /// Search ceiling in effect
    pub max_servers: u32,
    /// Whether `servers` actually meets the target (false at the ceiling)
    pub target_met: bool,
    /// Metrics at `servers`; absent when no servers are needed
    pub metrics: Option<QueueMetrics>,
}

/// Queue figures for a given crew
#[utoipa::path(
    post,
    path = "/queue/metrics",
    tag = "queue",
    request_body = MetricsRequest,
    responses(
        (status = 200, description = "Queue metrics", body = QueueMetrics),
        (status = 400, description = "Invalid rate or server count", body = crate::error::ErrorResponse)
    )
)]
pub async fn metrics(
    State(state): State<crate::AppState>,
    Json(request): Json<MetricsRequest>,
) -> AppResult<Json<QueueMetrics>> {
    let metrics = state
        .services
        .queue
        .metrics(request.lambda, request.mu, request.servers)?;
    Ok(Json(metrics))
}

/// Smallest crew meeting a target wait
#[utoipa::path(
    post,
    path = "/queue/minimum-servers",
    tag = "queue",
    request_body = MinimumServersRequest,
    responses(
        (status = 200, description = "Minimum crew", body = MinimumServersResponse),
        (status = 400, description = "Invalid service rate", body = crate::error::ErrorResponse)
    )
)]
pub async fn minimum_servers(
    State(state): State<crate::AppState>,
    Json(request): Json<MinimumServersRequest>,
) -> AppResult<Json<MinimumServersResponse>> {
    let target_wait_minutes = match request.target_wait_minutes {
        Some(target) => target,
        None => state.services.settings.get_settings().await.target_wait_time,
    };

    let queue = &state.services.queue;
    let servers = queue.minimum_servers(request.lambda, request.mu, target_wait_minutes)?;

    let metrics = if servers > 0 {
        Some(queue.metrics(request.lambda, request.mu, servers)?)
    } else {
        None
    };
    let target_met = metrics.map_or(true, |m| m.stable && m.wq <= target_wait_minutes);

    Ok(Json(MinimumServersResponse {
        servers,
        target_wait_minutes,
        max_servers: queue.max_servers(),
        target_met,
        metrics,
    }))
}
