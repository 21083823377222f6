//! Staffing endpoints

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::{
        enums::Direction,
        forecast::Forecast,
        parameters::Parameters,
        queue::CrossCheckReport,
        requirement::{DailyRequirementReport, ZoneRequirement},
    },
};

/// Daily report request
#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReportRequest {
    pub forecast: Forecast,
    /// Parameters to use instead of the current settings
    pub parameters: Option<Parameters>,
}

/// Single-zone what-if request
#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ZoneRequirementRequest {
    /// Passengers per hour in the zone
    pub passengers: i64,
    pub direction: Direction,
    pub parameters: Option<Parameters>,
}

/// Cross-check request
#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CrossCheckRequest {
    pub forecast: Forecast,
    pub parameters: Option<Parameters>,
    /// Target queue wait in minutes; defaults to the parameters' target
    pub target_wait_minutes: Option<f64>,
}

/// Report plus its queue-model cross-check
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CrossCheckResponse {
    pub report: DailyRequirementReport,
    pub cross_check: CrossCheckReport,
}

/// Compute the staffing report for a forecast
#[utoipa::path(
    post,
    path = "/staffing/report",
    tag = "staffing",
    request_body = ReportRequest,
    responses(
        (status = 200, description = "Daily requirement report", body = DailyRequirementReport),
        (status = 400, description = "Invalid parameters", body = crate::error::ErrorResponse),
        (status = 422, description = "Parameters cannot be computed", body = crate::error::ErrorResponse)
    )
)]
pub async fn compute_report(
    State(state): State<crate::AppState>,
    Json(request): Json<ReportRequest>,
) -> AppResult<Json<DailyRequirementReport>> {
    let params = state.services.settings.resolve(request.parameters).await?;
    let report = state.services.staffing.daily_report(&request.forecast, &params)?;
    Ok(Json(report))
}

/// Required staff for one zone-hour
#[utoipa::path(
    post,
    path = "/staffing/zone",
    tag = "staffing",
    request_body = ZoneRequirementRequest,
    responses(
        (status = 200, description = "Zone requirement", body = ZoneRequirement)
    )
)]
pub async fn zone_requirement(
    State(state): State<crate::AppState>,
    Json(request): Json<ZoneRequirementRequest>,
) -> AppResult<Json<ZoneRequirement>> {
    let params = state.services.settings.resolve(request.parameters).await?;
    let requirement =
        state
            .services
            .staffing
            .zone_requirement(request.passengers, &params, request.direction)?;
    Ok(Json(requirement))
}

/// Compute a report and compare its crews with the queue model
#[utoipa::path(
    post,
    path = "/staffing/cross-check",
    tag = "staffing",
    request_body = CrossCheckRequest,
    responses(
        (status = 200, description = "Report with cross-check", body = CrossCheckResponse)
    )
)]
pub async fn cross_check(
    State(state): State<crate::AppState>,
    Json(request): Json<CrossCheckRequest>,
) -> AppResult<Json<CrossCheckResponse>> {
    let params = state.services.settings.resolve(request.parameters).await?;
    let target = request.target_wait_minutes.unwrap_or(params.target_wait_time);

    let report = state.services.staffing.daily_report(&request.forecast, &params)?;
    let cross_check = state.services.queue.cross_check(&report, target)?;

    Ok(Json(CrossCheckResponse { report, cross_check }))
}
