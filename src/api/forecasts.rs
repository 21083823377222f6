//! Forecast endpoints

use axum::{http::StatusCode, Json};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::forecast::Forecast,
};

/// Manual forecast entry: one total per hour and direction
#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ManualForecastRequest {
    /// Date of the forecast (YYYY-MM-DD)
    pub date: String,
    pub terminal: Option<String>,
    /// Arrival totals, index = starting hour
    pub arrivals: Vec<u64>,
    /// Departure totals, index = starting hour
    pub departures: Vec<u64>,
}

/// Build a forecast from hourly totals split evenly across zones
#[utoipa::path(
    post,
    path = "/forecasts/manual",
    tag = "forecasts",
    request_body = ManualForecastRequest,
    responses(
        (status = 201, description = "Forecast created", body = Forecast),
        (status = 400, description = "Invalid date or hour count", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_manual_forecast(
    Json(request): Json<ManualForecastRequest>,
) -> AppResult<(StatusCode, Json<Forecast>)> {
    let date = NaiveDate::parse_from_str(&request.date, "%Y-%m-%d")
        .map_err(|_| AppError::BadRequest(format!("Invalid date: {}", request.date)))?;

    let mut forecast = Forecast::from_hourly_totals(
        Uuid::new_v4().to_string(),
        date,
        &request.arrivals,
        &request.departures,
        Utc::now(),
    )?;
    forecast.terminal = request.terminal;

    Ok((StatusCode::CREATED, Json(forecast)))
}
