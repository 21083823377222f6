//! Passenger forecast model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::enums::{Direction, Zone};
use crate::error::{AppError, AppResult};

/// Number of hourly slots in a manual forecast day
pub const HOURS_PER_DAY: usize = 24;

/// Passenger counts of one direction, one field per zone.
///
/// Missing zones deserialize as 0 and unknown keys are ignored, so partial
/// upstream rows never fail to load. Counts are kept as received; readers go
/// through [`ZonePassengers::get`], which clamps negatives to 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct ZonePassengers {
    #[serde(rename = "AB")]
    pub ab: i64,
    #[serde(rename = "C")]
    pub c: i64,
    #[serde(rename = "D")]
    pub d: i64,
    #[serde(rename = "EF")]
    pub ef: i64,
}

impl ZonePassengers {
    pub fn get(&self, zone: Zone) -> u64 {
        let raw = match zone {
            Zone::Ab => self.ab,
            Zone::C => self.c,
            Zone::D => self.d,
            Zone::Ef => self.ef,
        };
        raw.max(0) as u64
    }

    /// Sum of the (clamped) zone counts, saturating at `u64::MAX`
    pub fn sum(&self) -> u64 {
        Zone::ALL
            .iter()
            .fold(0u64, |acc, zone| acc.saturating_add(self.get(*zone)))
    }

    /// Split a total evenly across the zones, remainder going to EF.
    ///
    /// The zones always add up to `total` (capped at `i64::MAX`).
    pub fn split_evenly(total: u64) -> Self {
        let total = i64::try_from(total).unwrap_or(i64::MAX);
        let per_zone = ((total as f64 / 4.0).round() as i64).min(total / 3);
        Self {
            ab: per_zone,
            c: per_zone,
            d: per_zone,
            ef: total - per_zone * 3,
        }
    }
}

/// One hour-of-day slot of the forecast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HourlyPassengerBucket {
    /// Display label, e.g. "07~08"
    pub hour_label: String,
    /// Starting hour (0-23)
    pub hour_start: u8,
    #[serde(default)]
    pub arrival_by_zone: ZonePassengers,
    /// Authoritative arrival total when supplied by the source
    #[serde(default)]
    pub arrival_total: Option<i64>,
    #[serde(default)]
    pub departure_by_zone: ZonePassengers,
    /// Authoritative departure total when supplied by the source
    #[serde(default)]
    pub departure_total: Option<i64>,
}

impl HourlyPassengerBucket {
    pub fn zones(&self, direction: Direction) -> &ZonePassengers {
        match direction {
            Direction::Arrival => &self.arrival_by_zone,
            Direction::Departure => &self.departure_by_zone,
        }
    }

    /// Passenger total for a direction.
    ///
    /// A positive supplied total wins; an absent or zero total falls back to
    /// the zone sum.
    pub fn passengers(&self, direction: Direction) -> u64 {
        let supplied = match direction {
            Direction::Arrival => self.arrival_total,
            Direction::Departure => self.departure_total,
        };
        match supplied {
            Some(total) if total > 0 => total as u64,
            _ => self.zones(direction).sum(),
        }
    }

    /// Arrival plus departure passengers for the hour
    pub fn combined_total(&self) -> u64 {
        self.passengers(Direction::Arrival)
            .saturating_add(self.passengers(Direction::Departure))
    }
}

/// Format the label of the hour starting at `hour_start`, e.g. "07~08"
pub fn hour_label(hour_start: u8) -> String {
    format!("{:02}~{:02}", hour_start, hour_start as u16 + 1)
}

/// Hourly passenger forecast for one calendar date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Forecast {
    pub id: String,
    pub date: NaiveDate,
    /// Terminal the forecast covers (e.g. "T1")
    #[serde(default)]
    pub terminal: Option<String>,
    /// Where the numbers came from (e.g. "manual", "browser-cors")
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub last_updated: Option<DateTime<Utc>>,
    /// Chronologically ordered hourly buckets
    pub hourly_data: Vec<HourlyPassengerBucket>,
}

impl Forecast {
    /// Build a forecast from per-hour direction totals (manual entry).
    ///
    /// Hour `i` covers `i~i+1`. When the two slices differ in length the
    /// missing side reads as 0. Between 1 and [`HOURS_PER_DAY`] hours are
    /// accepted; anything else is a `BadRequest`.
    pub fn from_hourly_totals(
        id: impl Into<String>,
        date: NaiveDate,
        arrivals: &[u64],
        departures: &[u64],
        last_updated: DateTime<Utc>,
    ) -> AppResult<Self> {
        let hours = arrivals.len().max(departures.len());
        if hours == 0 || hours > HOURS_PER_DAY {
            return Err(AppError::BadRequest(format!(
                "Expected between 1 and {} hourly totals, got {}",
                HOURS_PER_DAY, hours
            )));
        }

        let hourly_data = (0..hours as u8)
            .map(|hour_start| {
                let i = usize::from(hour_start);
                let arrival = ZonePassengers::split_evenly(arrivals.get(i).copied().unwrap_or(0));
                let departure =
                    ZonePassengers::split_evenly(departures.get(i).copied().unwrap_or(0));
                HourlyPassengerBucket {
                    hour_label: hour_label(hour_start),
                    hour_start,
                    arrival_total: Some(arrival.sum() as i64),
                    arrival_by_zone: arrival,
                    departure_total: Some(departure.sum() as i64),
                    departure_by_zone: departure,
                }
            })
            .collect();

        Ok(Self {
            id: id.into(),
            date,
            terminal: None,
            source: Some("manual".to_string()),
            last_updated: Some(last_updated),
            hourly_data,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_hour_label() {
        assert_eq!(hour_label(7), "07~08");
        assert_eq!(hour_label(23), "23~24");
    }

    #[test]
    fn test_missing_zones_and_negatives_read_as_zero() {
        let zones: ZonePassengers =
            serde_json::from_value(json!({ "AB": 120, "D": -5, "XY": 9 })).unwrap();
        assert_eq!(zones.get(Zone::Ab), 120);
        assert_eq!(zones.get(Zone::C), 0);
        assert_eq!(zones.get(Zone::D), 0);
        assert_eq!(zones.sum(), 120);
    }

    #[test]
    fn test_supplied_total_is_authoritative() {
        let bucket: HourlyPassengerBucket = serde_json::from_value(json!({
            "hourLabel": "08~09",
            "hourStart": 8,
            "arrivalByZone": { "AB": 100, "C": 100, "D": 100, "EF": 100 },
            "arrivalTotal": 450,
            "departureByZone": { "AB": 10, "C": 20 }
        }))
        .unwrap();

        assert_eq!(bucket.passengers(Direction::Arrival), 450);
        assert_eq!(bucket.passengers(Direction::Departure), 30);
        assert_eq!(bucket.combined_total(), 480);
    }

    #[test]
    fn test_zero_total_falls_back_to_zone_sum() {
        let bucket = HourlyPassengerBucket {
            hour_label: hour_label(0),
            hour_start: 0,
            arrival_by_zone: ZonePassengers { ab: 5, c: 5, d: 5, ef: 5 },
            arrival_total: Some(0),
            departure_by_zone: ZonePassengers::default(),
            departure_total: None,
        };
        assert_eq!(bucket.passengers(Direction::Arrival), 20);
    }

    #[test]
    fn test_split_evenly_puts_remainder_in_ef() {
        let zones = ZonePassengers::split_evenly(1003);
        assert_eq!((zones.ab, zones.c, zones.d, zones.ef), (251, 251, 251, 250));
        assert_eq!(zones.sum(), 1003);

        for total in [0, 1, 2, 3, 5, 6, 10] {
            let zones = ZonePassengers::split_evenly(total);
            assert_eq!(zones.sum(), total, "split of {}", total);
            assert!(zones.ef >= 0);
        }
        let zones = ZonePassengers::split_evenly(2);
        assert_eq!((zones.ab, zones.c, zones.d, zones.ef), (0, 0, 0, 2));
    }

    #[test]
    fn test_huge_counts_saturate() {
        let zones = ZonePassengers { ab: i64::MAX, c: i64::MAX, d: i64::MAX, ef: i64::MAX };
        assert_eq!(zones.sum(), u64::MAX);

        let bucket = HourlyPassengerBucket {
            hour_label: hour_label(0),
            hour_start: 0,
            arrival_by_zone: zones,
            arrival_total: None,
            departure_by_zone: ZonePassengers::default(),
            departure_total: Some(i64::MAX),
        };
        assert_eq!(bucket.combined_total(), u64::MAX);

        let zones = ZonePassengers::split_evenly(u64::MAX);
        assert_eq!(zones.sum(), i64::MAX as u64);
    }

    #[test]
    fn test_manual_forecast_from_totals() {
        let date = NaiveDate::from_ymd_opt(2025, 12, 1).unwrap();
        let forecast =
            Forecast::from_hourly_totals("manual-1", date, &[400, 800], &[200], Utc::now()).unwrap();

        assert_eq!(forecast.hourly_data.len(), 2);
        assert_eq!(forecast.source.as_deref(), Some("manual"));
        let second = &forecast.hourly_data[1];
        assert_eq!(second.hour_label, "01~02");
        assert_eq!(second.passengers(Direction::Arrival), 800);
        assert_eq!(second.passengers(Direction::Departure), 0);
        assert_eq!(second.arrival_by_zone.get(Zone::C), 200);
    }

    #[test]
    fn test_manual_forecast_small_totals_match_zone_sum() {
        let date = NaiveDate::from_ymd_opt(2025, 12, 1).unwrap();
        let forecast = Forecast::from_hourly_totals("manual-2", date, &[2], &[0], Utc::now()).unwrap();

        let hour = &forecast.hourly_data[0];
        assert_eq!(hour.arrival_by_zone.sum(), 2);
        assert_eq!(hour.arrival_total, Some(2));
        assert_eq!(hour.passengers(Direction::Arrival), 2);
    }

    #[test]
    fn test_manual_forecast_hour_count_limits() {
        let date = NaiveDate::from_ymd_opt(2025, 12, 1).unwrap();

        let full_day = vec![10; HOURS_PER_DAY];
        let forecast = Forecast::from_hourly_totals("day", date, &full_day, &[], Utc::now()).unwrap();
        assert_eq!(forecast.hourly_data.last().map(|h| h.hour_start), Some(23));

        let too_many = vec![10; 300];
        assert!(matches!(
            Forecast::from_hourly_totals("long", date, &too_many, &[], Utc::now()),
            Err(AppError::BadRequest(_))
        ));
        assert!(matches!(
            Forecast::from_hourly_totals("empty", date, &[], &[], Utc::now()),
            Err(AppError::BadRequest(_))
        ));
    }
}
