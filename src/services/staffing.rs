//! Staffing requirement calculation

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{
        enums::{AlertLevel, Direction, Zone},
        forecast::{Forecast, HourlyPassengerBucket, ZonePassengers},
        parameters::{Parameters, StaffingRates},
        requirement::{DailyRequirementReport, HourlyRequirement, Summary, ZoneRequirement},
    },
    services::alerts,
};

/// Staff needed to serve `passengers` in one zone for one hour.
///
/// `c = ceil(manual / (targetUtilization * mu_eff))`, where automated-gate
/// users are removed from the load and `mu_eff` blends the Korean and foreign
/// service rates. Any positive load needs at least one officer.
///
/// `rates.target_utilization` and the blended rate must be positive; callers
/// check this once per parameter set (see [`ensure_computable`]).
pub fn required_staff_for_zone(passengers: i64, rates: &StaffingRates) -> u32 {
    if passengers <= 0 {
        return 0;
    }

    let manual_passengers = passengers as f64 * (1.0 - rates.auto_gate_ratio);
    let raw_required =
        manual_passengers / (rates.target_utilization * rates.effective_service_rate());

    raw_required.ceil().max(1.0) as u32
}

/// Per-zone requirements of one direction, in canonical zone order
pub fn requirements_for_direction(
    zones: &ZonePassengers,
    params: &Parameters,
    direction: Direction,
) -> IndexMap<Zone, ZoneRequirement> {
    let rates = params.rates_for(direction);
    let effective_service_rate = rates.effective_service_rate();

    Zone::ALL
        .iter()
        .map(|&zone| {
            let passengers = zones.get(zone);
            let requirement = ZoneRequirement {
                passengers,
                required_staff: required_staff_for_zone(passengers as i64, &rates),
                effective_service_rate,
                alert_level: AlertLevel::Normal,
            };
            (zone, requirement)
        })
        .collect()
}

/// Reject parameter sets that would divide by zero in the staffing formula
pub fn ensure_computable(params: &Parameters) -> AppResult<()> {
    if !(params.target_utilization > 0.0) {
        return Err(AppError::Precondition(format!(
            "targetUtilization must be positive, got {}",
            params.target_utilization
        )));
    }

    for direction in Direction::ALL {
        let rate = params.rates_for(direction).effective_service_rate();
        if !(rate > 0.0) || !rate.is_finite() {
            return Err(AppError::Precondition(format!(
                "effective {} service rate must be positive, got {}",
                direction, rate
            )));
        }
    }

    Ok(())
}

fn total_staff(zones: &IndexMap<Zone, ZoneRequirement>) -> u32 {
    zones
        .values()
        .fold(0u32, |acc, z| acc.saturating_add(z.required_staff))
}

fn hourly_requirement(bucket: &HourlyPassengerBucket, params: &Parameters) -> HourlyRequirement {
    let arrival = requirements_for_direction(&bucket.arrival_by_zone, params, Direction::Arrival);
    let departure =
        requirements_for_direction(&bucket.departure_by_zone, params, Direction::Departure);

    let arrival_passengers = bucket.passengers(Direction::Arrival);
    let departure_passengers = bucket.passengers(Direction::Departure);
    for (direction, total) in [
        (Direction::Arrival, arrival_passengers),
        (Direction::Departure, departure_passengers),
    ] {
        let zone_sum = bucket.zones(direction).sum();
        if zone_sum > 0 && zone_sum != total {
            tracing::debug!(
                hour = %bucket.hour_label,
                %direction,
                total,
                zone_sum,
                "Supplied total differs from zone sum; keeping supplied total"
            );
        }
    }

    HourlyRequirement {
        hour_label: bucket.hour_label.clone(),
        hour_start: bucket.hour_start,
        total_arrival_staff: total_staff(&arrival),
        total_departure_staff: total_staff(&departure),
        arrival,
        departure,
        arrival_passengers,
        departure_passengers,
        alert_level: AlertLevel::Normal,
    }
}

fn summarize(hours: &[HourlyRequirement]) -> Summary {
    let mut summary = Summary::default();

    for hour in hours {
        summary.total_daily_arrival =
            summary.total_daily_arrival.saturating_add(hour.arrival_passengers);
        summary.total_daily_departure =
            summary.total_daily_departure.saturating_add(hour.departure_passengers);

        summary.max_arrival_staff = summary.max_arrival_staff.max(hour.total_arrival_staff);
        summary.max_departure_staff = summary.max_departure_staff.max(hour.total_departure_staff);

        let total = hour.total_passengers();
        if total > summary.max_total_passengers {
            summary.max_total_passengers = total;
            summary.peak_hour = Some(hour.hour_label.clone());
        }

        if hour.alert_level.is_alert() {
            summary.alert_hours.push(hour.hour_label.clone());
        }
    }

    summary
}

/// Full-day requirement report, stamped with the current time
pub fn compute_daily_report(
    forecast: &Forecast,
    params: &Parameters,
) -> AppResult<DailyRequirementReport> {
    compute_daily_report_at(forecast, params, Utc::now())
}

/// Full-day requirement report with an explicit computation timestamp.
///
/// Apart from the report id, the result depends only on the inputs.
pub fn compute_daily_report_at(
    forecast: &Forecast,
    params: &Parameters,
    calculated_at: DateTime<Utc>,
) -> AppResult<DailyRequirementReport> {
    ensure_computable(params)?;

    let mut hourly_requirement: Vec<HourlyRequirement> = forecast
        .hourly_data
        .iter()
        .map(|bucket| hourly_requirement(bucket, params))
        .collect();

    let totals: Vec<u64> = hourly_requirement
        .iter()
        .map(HourlyRequirement::total_passengers)
        .collect();
    let levels = alerts::escalate_levels(&totals, &params.alert_thresholds);
    for (hour, level) in hourly_requirement.iter_mut().zip(levels) {
        hour.alert_level = level;
    }

    let summary = summarize(&hourly_requirement);

    tracing::debug!(
        forecast_id = %forecast.id,
        date = %forecast.date,
        hours = hourly_requirement.len(),
        alert_hours = summary.alert_hours.len(),
        peak_hour = ?summary.peak_hour,
        "Computed daily staffing report"
    );

    Ok(DailyRequirementReport {
        id: Uuid::new_v4(),
        forecast_id: forecast.id.clone(),
        date: forecast.date,
        calculated_at,
        parameters: params.clone(),
        hourly_requirement,
        summary,
    })
}

#[derive(Clone, Copy, Default)]
pub struct StaffingService;

impl StaffingService {
    pub fn new() -> Self {
        Self
    }

    pub fn daily_report(
        &self,
        forecast: &Forecast,
        params: &Parameters,
    ) -> AppResult<DailyRequirementReport> {
        compute_daily_report(forecast, params)
    }

    /// What-if staffing of a single zone
    pub fn zone_requirement(
        &self,
        passengers: i64,
        params: &Parameters,
        direction: Direction,
    ) -> AppResult<ZoneRequirement> {
        ensure_computable(params)?;

        let rates = params.rates_for(direction);
        Ok(ZoneRequirement {
            passengers: passengers.max(0) as u64,
            required_staff: required_staff_for_zone(passengers, &rates),
            effective_service_rate: rates.effective_service_rate(),
            alert_level: AlertLevel::Normal,
        })
    }
}
