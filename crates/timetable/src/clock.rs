//! Wall-clock arithmetic for schedule computation.
//!
//! Times are plain hour:minute values with no date or timezone attached.
//! Partial admin input is expected (a route being edited may have no start
//! time yet), so every operation degrades to [`ClockTime::Unknown`] instead
//! of failing — the UI renders the sentinel as `--:--`.

use std::fmt;

use chrono::{NaiveTime, Timelike};

pub const MINUTES_PER_DAY: i64 = 24 * 60;

/// Rendered form of [`ClockTime::Unknown`].
pub const UNKNOWN_TIME: &str = "--:--";

// ============================================================================
// ClockTime
// ============================================================================

/// A wall-clock time that may be unknown.
///
/// `Unknown` is a value, not an error: it flows through arithmetic unchanged
/// so a half-filled route still renders as a coherent partial timetable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ClockTime {
    Known(NaiveTime),
    Unknown,
}

impl ClockTime {
    pub fn from_hm(hour: u32, minute: u32) -> Self {
        match NaiveTime::from_hms_opt(hour, minute, 0) {
            Some(t) => Self::Known(t),
            None => Self::Unknown,
        }
    }

    /// Parse `HH:MM`, tolerating trailing seconds and fractional parts
    /// (`08:00:30.5` parses as `08:00`). Anything else is `Unknown`.
    pub fn parse(text: &str) -> Self {
        let mut parts = text.trim().splitn(3, ':');

        let hour = match parts.next().and_then(parse_component) {
            Some(h) => h,
            None => return Self::Unknown,
        };
        let minute = match parts.next().and_then(parse_component) {
            Some(m) => m,
            None => return Self::Unknown,
        };

        Self::from_hm(hour, minute)
    }

    pub fn is_known(&self) -> bool {
        matches!(self, Self::Known(_))
    }

    /// Minutes since midnight, if known.
    pub fn minutes_from_midnight(&self) -> Option<u32> {
        match self {
            Self::Known(t) => Some(t.hour() * 60 + t.minute()),
            Self::Unknown => None,
        }
    }

    /// Add minutes, rounding to the nearest whole minute first, wrapping
    /// silently past midnight. Callers that need to detect the rollover must
    /// compare against [`Self::minutes_from_midnight`] before the wrap.
    pub fn add_minutes(self, minutes: f64) -> Self {
        let base = match self.minutes_from_midnight() {
            Some(m) => i64::from(m),
            None => return Self::Unknown,
        };

        let add = if minutes.is_finite() && minutes > 0.0 {
            minutes.round() as i64
        } else {
            0
        };

        let total = (base + add).rem_euclid(MINUTES_PER_DAY);
        Self::from_hm((total / 60) as u32, (total % 60) as u32)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Known(t) => write!(f, "{:02}:{:02}", t.hour(), t.minute()),
            Self::Unknown => write!(f, "{}", UNKNOWN_TIME),
        }
    }
}

/// Numeric prefix of a time component; `"30.5"` gives 30.
fn parse_component(part: &str) -> Option<u32> {
    let digits = part.split('.').next().unwrap_or("");
    digits.trim().parse().ok()
}

// ============================================================================
// TravelDuration
// ============================================================================

/// Elapsed travel time between two clock readings.
///
/// `hours`/`minutes` are the split form of `total_minutes` for display.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TravelDuration {
    pub hours: u32,
    pub minutes: u32,
    pub total_minutes: u32,
}

impl TravelDuration {
    pub const ZERO: Self = Self {
        hours: 0,
        minutes: 0,
        total_minutes: 0,
    };

    pub fn from_minutes(total_minutes: u32) -> Self {
        Self {
            hours: total_minutes / 60,
            minutes: total_minutes % 60,
            total_minutes,
        }
    }

    /// Elapsed minutes from `start` to `end`. An end before the start is read
    /// as a single midnight rollover (journeys crossing more than one midnight
    /// are out of scope). Either side unknown gives the zero duration.
    pub fn between(start: ClockTime, end: ClockTime) -> Self {
        let (start, end) = match (start.minutes_from_midnight(), end.minutes_from_midnight()) {
            (Some(s), Some(e)) => (i64::from(s), i64::from(e)),
            _ => return Self::ZERO,
        };

        let mut diff = end - start;
        if diff < 0 {
            diff += MINUTES_PER_DAY; // overnight travel
        }

        Self::from_minutes(diff as u32)
    }
}

impl fmt::Display for TravelDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}h {}m", self.hours, self.minutes)
    }
}

// ============================================================================
// Segment timing
// ============================================================================

/// Minutes to cover `distance_km` at `speed_kmh`, rounded to the nearest
/// whole minute.
///
/// Returns 0 for absent, non-positive, or non-finite input rather than
/// erroring: an admin mid-edit leaves distances and speeds blank, and the
/// partial schedule must still render.
pub fn travel_minutes(distance_km: f64, speed_kmh: f64) -> u32 {
    if !distance_km.is_finite() || distance_km <= 0.0 {
        return 0;
    }
    if !speed_kmh.is_finite() || speed_kmh <= 0.0 {
        return 0;
    }
    (distance_km / speed_kmh * 60.0).round() as u32
}
