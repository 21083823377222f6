//! Staffing requirement report model

use chrono::{DateTime, NaiveDate, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::enums::{AlertLevel, Direction, Zone};
use super::parameters::Parameters;

/// Required staff for one zone in one hour
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ZoneRequirement {
    /// Passenger load of the zone (negative input clamped to 0)
    pub passengers: u64,
    pub required_staff: u32,
    /// Blended service rate the count was derived from; informational
    pub effective_service_rate: f64,
    /// Zone-level congestion is not classified; always `normal`
    pub alert_level: AlertLevel,
}

/// Staffing and congestion figures for one hour
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HourlyRequirement {
    pub hour_label: String,
    pub hour_start: u8,
    #[schema(value_type = Object)]
    pub arrival: IndexMap<Zone, ZoneRequirement>,
    #[schema(value_type = Object)]
    pub departure: IndexMap<Zone, ZoneRequirement>,
    pub total_arrival_staff: u32,
    pub total_departure_staff: u32,
    pub arrival_passengers: u64,
    pub departure_passengers: u64,
    pub alert_level: AlertLevel,
}

impl HourlyRequirement {
    pub fn zones(&self, direction: Direction) -> &IndexMap<Zone, ZoneRequirement> {
        match direction {
            Direction::Arrival => &self.arrival,
            Direction::Departure => &self.departure,
        }
    }

    pub fn total_passengers(&self) -> u64 {
        self.arrival_passengers.saturating_add(self.departure_passengers)
    }
}

/// Day-level aggregates of a report
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_daily_arrival: u64,
    pub total_daily_departure: u64,
    /// Peak concurrent arrival staff over the day
    pub max_arrival_staff: u32,
    /// Peak concurrent departure staff over the day
    pub max_departure_staff: u32,
    /// First hour with the highest combined passenger total
    pub peak_hour: Option<String>,
    pub max_total_passengers: u64,
    /// Chronological labels of hours above `normal`
    pub alert_hours: Vec<String>,
}

/// One zone's hourly series within a report
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ZoneSeriesPoint {
    pub hour_label: String,
    pub hour_start: u8,
    pub passengers: u64,
    pub required_staff: u32,
}

/// Full-day staffing requirement computed from a forecast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DailyRequirementReport {
    pub id: Uuid,
    pub forecast_id: String,
    pub date: NaiveDate,
    pub calculated_at: DateTime<Utc>,
    /// Snapshot of the parameters the report was computed with
    pub parameters: Parameters,
    pub hourly_requirement: Vec<HourlyRequirement>,
    pub summary: Summary,
}

impl DailyRequirementReport {
    /// Hourly record starting at `hour_start`
    pub fn hour(&self, hour_start: u8) -> Option<&HourlyRequirement> {
        self.hourly_requirement
            .iter()
            .find(|h| h.hour_start == hour_start)
    }

    /// Hourly record of the summary's peak hour
    pub fn peak_requirement(&self) -> Option<&HourlyRequirement> {
        let peak = self.summary.peak_hour.as_deref()?;
        self.hourly_requirement.iter().find(|h| h.hour_label == peak)
    }

    /// Passengers and required staff of one zone, hour by hour
    pub fn zone_series(&self, direction: Direction, zone: Zone) -> Vec<ZoneSeriesPoint> {
        self.hourly_requirement
            .iter()
            .map(|hour| {
                let requirement = hour.zones(direction).get(&zone);
                ZoneSeriesPoint {
                    hour_label: hour.hour_label.clone(),
                    hour_start: hour.hour_start,
                    passengers: requirement.map_or(0, |r| r.passengers),
                    required_staff: requirement.map_or(0, |r| r.required_staff),
                }
            })
            .collect()
    }
}
