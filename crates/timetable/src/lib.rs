//! # ticket-ride-timetable
//!
//! Schedule calculator for the Ticket Ride booking application.
//!
//! Given a train's ordered stop sequence, per-segment distances, a start
//! time, and an average speed, this crate computes arrival/departure times at
//! every stop (with fixed dwell at intermediate stations) and derives the
//! travel duration, distance, and fare between any two stops of the route.
//!
//! ## Features
//!
//! - **Pure**: no clock reads, no I/O, no hidden state — every call is
//!   recomputed from its arguments
//! - **Edit-tolerant**: missing times and distances degrade to sentinel
//!   values (`--:--`, zero) so half-entered routes still render
//! - **Overnight-aware**: journeys may cross a single midnight; durations
//!   apply the rollover instead of going negative
//! - **Pluggable storage**: the CRUD backend sits behind the [`RouteStore`]
//!   trait, with an in-memory [`StaticRouteStore`] included
//!
//! ## Example
//!
//! ```
//! use ticket_ride_timetable::prelude::*;
//!
//! let stops = vec![
//!     RouteStop::new("mumbai-central", 0, 500.0),
//!     RouteStop::new("new-delhi", 1, 0.0),
//! ];
//! let params = TrainParameters {
//!     start_time: ClockTime::parse("08:00"),
//!     speed_kmh: 100.0,
//!     price_per_km: 2.5,
//! };
//!
//! let journey = journey_between(
//!     &stops,
//!     &"mumbai-central".into(),
//!     &"new-delhi".into(),
//!     &params,
//!     DEFAULT_DWELL_MINUTES,
//! )
//! .unwrap();
//!
//! assert_eq!(journey.departure.to_string(), "08:00");
//! assert_eq!(journey.arrival.to_string(), "13:00");
//! assert_eq!(journey.duration.to_string(), "5h 0m");
//! assert_eq!(journey.price, 1250);
//! ```

pub mod clock;
pub mod identifiers;
pub mod models;
pub mod provider;
pub mod schedule;

// Re-exports for convenience
pub mod prelude {
    pub use crate::clock::{travel_minutes, ClockTime, TravelDuration};
    pub use crate::identifiers::*;
    pub use crate::models::{traits::*, types::*};
    pub use crate::provider::{StaticRouteStore, StationRecord, TrainRecord};
    pub use crate::schedule::{build_schedule, fare, journey_between, total_travel_time};
}

pub use prelude::*;
