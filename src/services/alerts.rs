//! Congestion alert classification

use indexmap::IndexMap;

use crate::models::{
    enums::AlertLevel, forecast::HourlyPassengerBucket, parameters::AlertThresholds,
    requirement::HourlyRequirement,
};

/// An hour that can be classified: a label plus its arrival+departure total
pub trait CombinedTotal {
    fn hour_label(&self) -> &str;
    fn combined_total(&self) -> u64;
}

impl CombinedTotal for HourlyPassengerBucket {
    fn hour_label(&self) -> &str {
        &self.hour_label
    }

    fn combined_total(&self) -> u64 {
        HourlyPassengerBucket::combined_total(self)
    }
}

impl CombinedTotal for HourlyRequirement {
    fn hour_label(&self) -> &str {
        &self.hour_label
    }

    fn combined_total(&self) -> u64 {
        self.total_passengers()
    }
}

/// Ad-hoc labelled total, for callers without a forecast at hand
impl CombinedTotal for (String, u64) {
    fn hour_label(&self) -> &str {
        &self.0
    }

    fn combined_total(&self) -> u64 {
        self.1
    }
}

/// Severity of a single hour's passenger count.
///
/// Checks run top-down, so thresholds must be ordered
/// `blue <= yellow <= orange <= red`; an inverted set silently ranks wrong.
pub fn classify_instant(passengers: f64, thresholds: &AlertThresholds) -> AlertLevel {
    if passengers >= thresholds.red {
        AlertLevel::Red
    } else if passengers >= thresholds.orange {
        AlertLevel::Orange
    } else if passengers >= thresholds.yellow {
        AlertLevel::Yellow
    } else if passengers >= thresholds.blue {
        AlertLevel::Blue
    } else {
        AlertLevel::Normal
    }
}

/// Severity of each hour of an ordered sequence of totals, with the
/// consecutive-hour rules applied:
///
/// * two hours in a row above `yellow` lift the second to at least yellow;
/// * two hours in a row above `orange` make the second red.
///
/// The first hour has no predecessor and keeps its instant level.
pub fn escalate_levels(totals: &[u64], thresholds: &AlertThresholds) -> Vec<AlertLevel> {
    totals
        .iter()
        .enumerate()
        .map(|(i, &total)| {
            let current = total as f64;
            let mut level = classify_instant(current, thresholds);

            if let Some(&prev) = i.checked_sub(1).and_then(|p| totals.get(p)) {
                let prev = prev as f64;

                if prev > thresholds.yellow && current > thresholds.yellow {
                    level = level.max(AlertLevel::Yellow);
                }
                if prev > thresholds.orange && current > thresholds.orange {
                    level = AlertLevel::Red;
                }
            }

            level
        })
        .collect()
}

/// Severity per hour label, in the given order
pub fn classify_sequence<H: CombinedTotal>(
    hours: &[H],
    thresholds: &AlertThresholds,
) -> IndexMap<String, AlertLevel> {
    let totals: Vec<u64> = hours.iter().map(CombinedTotal::combined_total).collect();

    hours
        .iter()
        .map(|h| h.hour_label().to_string())
        .zip(escalate_levels(&totals, thresholds))
        .collect()
}
