//! Alert classification endpoints

use axum::{extract::State, Json};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    error::{AppError, AppResult},
    models::{enums::AlertLevel, parameters::AlertThresholds},
    services::alerts,
};

/// Single-hour classification request
#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClassifyRequest {
    /// Arrival plus departure passengers in the hour
    pub passengers: f64,
    /// Thresholds to use instead of the current settings
    pub thresholds: Option<AlertThresholds>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClassifyResponse {
    pub alert_level: AlertLevel,
    pub thresholds: AlertThresholds,
}

/// One labelled hour total
#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HourTotal {
    pub hour_label: String,
    /// Combined total; missing reads as 0
    #[serde(default)]
    pub total: u64,
}

/// Sequence classification request
#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SequenceRequest {
    /// Hours in chronological order
    pub hours: Vec<HourTotal>,
    pub thresholds: Option<AlertThresholds>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SequenceResponse {
    /// Level per hour label, in request order
    #[schema(value_type = Object)]
    pub levels: IndexMap<String, AlertLevel>,
    /// Labels above `normal`, in request order
    pub alert_hours: Vec<String>,
}

async fn resolve_thresholds(
    state: &crate::AppState,
    supplied: Option<AlertThresholds>,
) -> AlertThresholds {
    match supplied {
        Some(thresholds) => thresholds,
        None => state.services.settings.get_settings().await.alert_thresholds,
    }
}

/// Classify one hour's passenger count
#[utoipa::path(
    post,
    path = "/alerts/classify",
    tag = "alerts",
    request_body = ClassifyRequest,
    responses(
        (status = 200, description = "Alert level", body = ClassifyResponse)
    )
)]
pub async fn classify(
    State(state): State<crate::AppState>,
    Json(request): Json<ClassifyRequest>,
) -> AppResult<Json<ClassifyResponse>> {
    if !request.passengers.is_finite() {
        return Err(AppError::BadRequest("passengers must be a finite number".to_string()));
    }

    let thresholds = resolve_thresholds(&state, request.thresholds).await;
    let alert_level = alerts::classify_instant(request.passengers.max(0.0), &thresholds);

    Ok(Json(ClassifyResponse {
        alert_level,
        thresholds,
    }))
}

/// Classify an ordered sequence of hours with consecutive-hour escalation
#[utoipa::path(
    post,
    path = "/alerts/sequence",
    tag = "alerts",
    request_body = SequenceRequest,
    responses(
        (status = 200, description = "Alert level per hour", body = SequenceResponse)
    )
)]
pub async fn classify_sequence(
    State(state): State<crate::AppState>,
    Json(request): Json<SequenceRequest>,
) -> Json<SequenceResponse> {
    let thresholds = resolve_thresholds(&state, request.thresholds).await;

    let hours: Vec<(String, u64)> = request
        .hours
        .into_iter()
        .map(|h| (h.hour_label, h.total))
        .collect();
    let levels = alerts::classify_sequence(&hours, &thresholds);
    let alert_hours = levels
        .iter()
        .filter(|(_, level)| level.is_alert())
        .map(|(label, _)| label.clone())
        .collect();

    Json(SequenceResponse {
        levels,
        alert_hours,
    })
}
