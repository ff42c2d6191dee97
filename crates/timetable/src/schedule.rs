//! The schedule calculator: per-stop timetables and origin/destination
//! journeys for one train's route.
//!
//! Everything here is pure and total over shape-valid input. Missing admin
//! data (no start time, blank distances, zero speed) degrades to sentinel
//! values so a partially edited route still renders; only an origin or
//! destination that cannot be resolved on the route is a real error.
//!
//! A single edit to the route can shift every downstream time, so the whole
//! table is recomputed on every call — nothing is cached.

use crate::clock::{travel_minutes, ClockTime, TravelDuration};
use crate::models::types::{
    Journey, Result, RouteStop, StopSchedule, TimetableError, TrainParameters,
};
use crate::identifiers::StationIdentifier;

/// Compute arrival/departure times for every stop of a route.
///
/// `stops` must be sorted ascending by `sequence`. The first stop departs at
/// `start_time` with no dwell; every later stop arrives after the travel time
/// of the preceding segment and departs `dwell_minutes` later, except the
/// terminal stop, whose departure is set equal to its arrival and carries no
/// meaning.
///
/// A zero or absent segment distance makes the next stop inherit its
/// predecessor's departure time. An unknown `start_time` degrades every
/// entry to [`ClockTime::Unknown`].
///
/// The output has the same length as `stops` and is index-aligned with it.
pub fn build_schedule(
    stops: &[RouteStop],
    start_time: ClockTime,
    speed_kmh: f64,
    dwell_minutes: u32,
) -> Vec<StopSchedule> {
    let mut schedule = Vec::with_capacity(stops.len());
    let mut clock = start_time;

    for (k, stop) in stops.iter().enumerate() {
        let arrival = if k == 0 {
            clock
        } else {
            let distance = stops[k - 1].distance_or_zero();
            clock.add_minutes(f64::from(travel_minutes(distance, speed_kmh)))
        };

        let departure = if k + 1 < stops.len() && k > 0 {
            arrival.add_minutes(f64::from(dwell_minutes))
        } else {
            arrival
        };

        schedule.push(StopSchedule {
            station_id: stop.station_id.clone(),
            sequence: stop.sequence,
            arrival,
            departure,
        });
        clock = departure;
    }

    schedule
}

/// Whole-route running time from first departure to terminal arrival,
/// including dwell at every intermediate stop. Unlike a clock reading this
/// can exceed 24 hours, so it is summed directly rather than derived from
/// wrapped times.
pub fn total_travel_time(
    stops: &[RouteStop],
    speed_kmh: f64,
    dwell_minutes: u32,
) -> TravelDuration {
    if stops.len() < 2 {
        return TravelDuration::ZERO;
    }

    let mut total = 0;
    for (k, stop) in stops[..stops.len() - 1].iter().enumerate() {
        total += travel_minutes(stop.distance_or_zero(), speed_kmh);
        if k + 2 < stops.len() {
            total += dwell_minutes;
        }
    }

    TravelDuration::from_minutes(total)
}

/// Sum of segment distances from the stop at `from` up to (not including)
/// the stop at `to`.
fn segment_distance(stops: &[RouteStop], from: usize, to: usize) -> f64 {
    stops[from..to].iter().map(RouteStop::distance_or_zero).sum()
}

/// Fare for a distance at a whole-unit rate, rounded to nearest.
pub fn fare(distance_km: f64, price_per_km: f64) -> u64 {
    let amount = distance_km * price_per_km;
    if amount.is_finite() && amount > 0.0 {
        amount.round() as u64
    } else {
        0
    }
}

/// Timing, distance, and fare for a rider's leg between two stations of one
/// route.
///
/// Stations are matched by identity, not by sequence number. Fails when
/// either station is not on the route, or when the origin does not precede
/// the destination — a route only supports travel in its defined direction.
///
/// Times are read from the full [`build_schedule`] table, so the admin route
/// editor and the booking screen agree exactly.
pub fn journey_between(
    stops: &[RouteStop],
    origin: &StationIdentifier,
    destination: &StationIdentifier,
    params: &TrainParameters,
    dwell_minutes: u32,
) -> Result<Journey> {
    let origin_pos = stops
        .iter()
        .position(|s| &s.station_id == origin)
        .ok_or_else(|| TimetableError::StationNotFound(origin.clone()))?;
    let destination_pos = stops
        .iter()
        .position(|s| &s.station_id == destination)
        .ok_or_else(|| TimetableError::StationNotFound(destination.clone()))?;

    if origin_pos >= destination_pos {
        return Err(TimetableError::WrongDirection {
            origin: origin.clone(),
            destination: destination.clone(),
        });
    }

    let schedule = build_schedule(stops, params.start_time, params.speed_kmh, dwell_minutes);
    let departure = schedule[origin_pos].departure;
    let arrival = schedule[destination_pos].arrival;

    let distance_km = segment_distance(stops, origin_pos, destination_pos);

    Ok(Journey {
        origin: origin.clone(),
        destination: destination.clone(),
        departure,
        arrival,
        distance_km,
        price: fare(distance_km, params.price_per_km),
        duration: TravelDuration::between(departure, arrival),
    })
}
