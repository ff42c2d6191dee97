//! Core data types for routes, trains, and computed schedules.

use crate::clock::{ClockTime, TravelDuration};
use crate::identifiers::*;

/// Boarding/alighting dwell applied at every intermediate stop, in minutes.
/// Not applied at the first stop (the train starts there already boarded) or
/// the last (the run ends on arrival).
pub const DEFAULT_DWELL_MINUTES: u32 = 10;

// ============================================================================
// Stored records
// ============================================================================

/// One row of a train's route, as entered by an admin.
///
/// `distance_to_next_km` is the distance to the *next* stop by sequence; the
/// terminal stop's value is unused. `None` means the admin has not filled it
/// in yet — the schedule still renders, treating the hop as zero-length.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteStop {
    pub station_id: StationIdentifier,
    pub sequence: u32,
    pub distance_to_next_km: Option<f64>,
}

impl RouteStop {
    pub fn new(
        station_id: impl Into<StationIdentifier>,
        sequence: u32,
        distance_to_next_km: impl Into<Option<f64>>,
    ) -> Self {
        Self {
            station_id: station_id.into(),
            sequence,
            distance_to_next_km: distance_to_next_km.into(),
        }
    }

    /// Distance to the next stop, with absent or garbage values read as zero.
    pub fn distance_or_zero(&self) -> f64 {
        match self.distance_to_next_km {
            Some(d) if d.is_finite() && d > 0.0 => d,
            _ => 0.0,
        }
    }
}

/// Per-train schedule parameters, as entered by an admin.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrainParameters {
    /// Departure time at the first stop of the route.
    pub start_time: ClockTime,
    /// Average speed over every segment, km/h.
    pub speed_kmh: f64,
    /// Fare rate applied to cumulative distance, whole currency units per km.
    pub price_per_km: f64,
}

// ============================================================================
// Computed results (never persisted)
// ============================================================================

/// Arrival and departure at one stop, index-aligned with the input route.
///
/// For the terminal stop `departure` is set equal to `arrival` and carries no
/// meaning — the run ends there.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StopSchedule {
    pub station_id: StationIdentifier,
    pub sequence: u32,
    pub arrival: ClockTime,
    pub departure: ClockTime,
}

/// A rider's leg between two stops of one route, with fare and timing.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Journey {
    pub origin: StationIdentifier,
    pub destination: StationIdentifier,
    pub departure: ClockTime,
    pub arrival: ClockTime,
    /// Sum of segment distances from origin up to (not including) destination.
    pub distance_km: f64,
    /// Whole currency units, rounded to nearest.
    pub price: u64,
    pub duration: TravelDuration,
}

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TimetableError {
    #[error("station not on route: {0}")]
    StationNotFound(StationIdentifier),

    #[error("route does not run from {origin} to {destination}")]
    WrongDirection {
        origin: StationIdentifier,
        destination: StationIdentifier,
    },

    #[error("train not found: {0}")]
    TrainNotFound(TrainIdentifier),
}

pub type Result<T> = std::result::Result<T, TimetableError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_or_zero() {
        let stop = RouteStop::new("a", 0, 150.0);
        assert_eq!(stop.distance_or_zero(), 150.0);

        assert_eq!(RouteStop::new("a", 0, None).distance_or_zero(), 0.0);
        assert_eq!(RouteStop::new("a", 0, -3.0).distance_or_zero(), 0.0);
        assert_eq!(RouteStop::new("a", 0, f64::NAN).distance_or_zero(), 0.0);
    }

    #[test]
    fn test_error_display() {
        let err = TimetableError::WrongDirection {
            origin: StationIdentifier::new("delhi"),
            destination: StationIdentifier::new("mumbai"),
        };
        assert_eq!(err.to_string(), "route does not run from delhi to mumbai");
    }
}
