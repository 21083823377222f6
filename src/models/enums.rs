//! Shared domain enums

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ---------------------------------------------------------------------------
// Zone
// ---------------------------------------------------------------------------

/// Physical inspection zone of the checkpoint.
///
/// Arrival halls are named after their zones; departure halls reuse the same
/// keys for the gate groups 1,2 / 3 / 4 / 5,6.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
)]
pub enum Zone {
    #[serde(rename = "AB")]
    Ab,
    #[serde(rename = "C")]
    C,
    #[serde(rename = "D")]
    D,
    #[serde(rename = "EF")]
    Ef,
}

impl Zone {
    /// Canonical iteration order
    pub const ALL: [Zone; 4] = [Zone::Ab, Zone::C, Zone::D, Zone::Ef];

    /// Key used on the wire
    pub fn key(self) -> &'static str {
        match self {
            Zone::Ab => "AB",
            Zone::C => "C",
            Zone::D => "D",
            Zone::Ef => "EF",
        }
    }

    /// Display label for the zone in a given direction
    pub fn label(self, direction: Direction) -> &'static str {
        match direction {
            Direction::Arrival => self.key(),
            Direction::Departure => match self {
                Zone::Ab => "1,2",
                Zone::C => "3",
                Zone::D => "4",
                Zone::Ef => "5,6",
            },
        }
    }
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

// ---------------------------------------------------------------------------
// Direction
// ---------------------------------------------------------------------------

/// Passenger flow direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Arrival,
    Departure,
}

impl Direction {
    pub const ALL: [Direction; 2] = [Direction::Arrival, Direction::Departure];
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Direction::Arrival => "arrival",
            Direction::Departure => "departure",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// AlertLevel
// ---------------------------------------------------------------------------

/// Congestion severity tier, ordered from least to most severe
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    ToSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum AlertLevel {
    #[default]
    Normal,
    Blue,
    Yellow,
    Orange,
    Red,
}

impl AlertLevel {
    pub fn is_alert(self) -> bool {
        self != AlertLevel::Normal
    }
}

impl std::fmt::Display for AlertLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            AlertLevel::Normal => "normal",
            AlertLevel::Blue => "blue",
            AlertLevel::Yellow => "yellow",
            AlertLevel::Orange => "orange",
            AlertLevel::Red => "red",
        };
        write!(f, "{}", label)
    }
}
