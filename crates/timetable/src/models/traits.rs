//! The seam between the calculator and the external CRUD store.
//!
//! The booking application persists stations, trains, and routes elsewhere;
//! the calculator only ever sees an immutable snapshot through [`RouteStore`].
//! Implementations can be in-memory, database-backed, or remote.

use std::sync::Arc;

use crate::identifiers::*;
use crate::models::types::*;
use crate::schedule::{build_schedule, journey_between};

/// Read access to stored routes and train parameters, plus the schedule
/// queries the UI screens call.
///
/// `route_stops` must return stops sorted ascending by `sequence`; the
/// provided query methods rely on that order.
pub trait RouteStore: Send + Sync {
    // ---- Lookups ----

    /// Ordered stops of one train's route; empty when the train is unknown
    /// or has no route yet.
    fn route_stops(&self, train: &TrainIdentifier) -> Vec<RouteStop>;

    fn train_parameters(&self, train: &TrainIdentifier) -> Option<TrainParameters>;

    /// Display name for rendering; the calculator itself never reads it.
    fn station_name(&self, station: &StationIdentifier) -> Option<Arc<str>>;

    // ---- Collections ----

    fn train_ids(&self) -> Vec<TrainIdentifier>;

    // ---- Schedule queries ----

    /// Live timetable preview for the admin route editor. Partial parameters
    /// (unknown start time, zero speed) degrade the entries rather than fail;
    /// only a train the store has never seen is an error.
    fn timetable(&self, train: &TrainIdentifier, dwell_minutes: u32) -> Result<Vec<StopSchedule>> {
        let params = self
            .train_parameters(train)
            .ok_or_else(|| TimetableError::TrainNotFound(train.clone()))?;

        Ok(build_schedule(
            &self.route_stops(train),
            params.start_time,
            params.speed_kmh,
            dwell_minutes,
        ))
    }

    /// Fare, timing, and distance for a rider's chosen leg — the call behind
    /// search results, the booking confirmation, and the printed ticket.
    fn find_journey(
        &self,
        train: &TrainIdentifier,
        origin: &StationIdentifier,
        destination: &StationIdentifier,
        dwell_minutes: u32,
    ) -> Result<Journey> {
        let params = self
            .train_parameters(train)
            .ok_or_else(|| TimetableError::TrainNotFound(train.clone()))?;

        journey_between(
            &self.route_stops(train),
            origin,
            destination,
            &params,
            dwell_minutes,
        )
    }

    /// All trains whose route serves `origin` strictly before `destination`.
    fn search_trains(
        &self,
        origin: &StationIdentifier,
        destination: &StationIdentifier,
    ) -> Vec<TrainIdentifier> {
        self.train_ids()
            .into_iter()
            .filter(|train| {
                let stops = self.route_stops(train);
                let origin_pos = stops.iter().position(|s| &s.station_id == origin);
                let destination_pos = stops.iter().position(|s| &s.station_id == destination);
                matches!((origin_pos, destination_pos), (Some(o), Some(d)) if o < d)
            })
            .collect()
    }
}
