//! Data models for the staffing engine

pub mod enums;
pub mod forecast;
pub mod parameters;
pub mod queue;
pub mod requirement;

// Re-export commonly used types
pub use enums::{AlertLevel, Direction, Zone};
pub use forecast::{Forecast, HourlyPassengerBucket, ZonePassengers};
pub use parameters::{Parameters, StaffingRates, UpdateParameters};
pub use queue::{CrossCheckReport, QueueMetrics};
pub use requirement::{DailyRequirementReport, HourlyRequirement, Summary, ZoneRequirement};
