//! In-memory route store.
//!
//! Holds a snapshot of the stations, trains, and routes an admin has entered,
//! with lookup maps for the queries the UI issues. The real application keeps
//! this data in its CRUD backend; this store backs tests, previews, and
//! offline rendering.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::identifiers::*;
use crate::models::{traits::RouteStore, types::*};

// ============================================================================
// Stored records
// ============================================================================

#[derive(Clone, Debug)]
pub struct StationRecord {
    pub id: StationIdentifier,
    pub name: Arc<str>,
}

#[derive(Clone, Debug)]
pub struct TrainRecord {
    pub id: TrainIdentifier,
    pub name: Arc<str>,
    pub parameters: TrainParameters,
    /// Route rows; sorted by `sequence` at ingest.
    pub stops: Vec<RouteStop>,
}

// ============================================================================
// Static store
// ============================================================================

/// In-memory [`RouteStore`].
///
/// This type is cheap to clone since all data is stored in `Arc`s.
#[derive(Clone, Default)]
pub struct StaticRouteStore {
    trains: Vec<Arc<TrainRecord>>,

    // Lookup maps
    train_map: HashMap<TrainIdentifier, Arc<TrainRecord>>,
    station_map: HashMap<StationIdentifier, Arc<StationRecord>>,
}

impl StaticRouteStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from admin-entered data.
    ///
    /// Each train's stops are sorted ascending by `sequence` here, so every
    /// later read sees them in physical stop order regardless of entry order.
    pub fn from_data(stations: Vec<StationRecord>, trains: Vec<TrainRecord>) -> Self {
        debug!(
            stations = stations.len(),
            trains = trains.len(),
            "building static route store"
        );

        let trains: Vec<Arc<TrainRecord>> = trains
            .into_iter()
            .map(|mut train| {
                train.stops.sort_by_key(|s| s.sequence);
                if train.stops.windows(2).any(|w| w[0].sequence == w[1].sequence) {
                    warn!(train = %train.id, "route has duplicate sequence values");
                }
                Arc::new(train)
            })
            .collect();

        let train_map: HashMap<_, _> = trains
            .iter()
            .map(|t| (t.id.clone(), t.clone()))
            .collect();

        let station_map: HashMap<_, _> = stations
            .into_iter()
            .map(Arc::new)
            .map(|s| (s.id.clone(), s.clone()))
            .collect();

        Self {
            trains,
            train_map,
            station_map,
        }
    }

    pub fn get_train(&self, id: &TrainIdentifier) -> Option<Arc<TrainRecord>> {
        self.train_map.get(id).cloned()
    }

    pub fn get_station(&self, id: &StationIdentifier) -> Option<Arc<StationRecord>> {
        self.station_map.get(id).cloned()
    }
}

impl RouteStore for StaticRouteStore {
    fn route_stops(&self, train: &TrainIdentifier) -> Vec<RouteStop> {
        self.train_map
            .get(train)
            .map(|t| t.stops.clone())
            .unwrap_or_default()
    }

    fn train_parameters(&self, train: &TrainIdentifier) -> Option<TrainParameters> {
        self.train_map.get(train).map(|t| t.parameters)
    }

    fn station_name(&self, station: &StationIdentifier) -> Option<Arc<str>> {
        self.station_map.get(station).map(|s| s.name.clone())
    }

    fn train_ids(&self) -> Vec<TrainIdentifier> {
        self.trains.iter().map(|t| t.id.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ClockTime;

    fn sample_store() -> StaticRouteStore {
        let stations = vec![
            StationRecord {
                id: "station-001".into(),
                name: "Mumbai Central".into(),
            },
            StationRecord {
                id: "station-002".into(),
                name: "New Delhi".into(),
            },
            StationRecord {
                id: "station-004".into(),
                name: "Kolkata".into(),
            },
        ];

        let trains = vec![
            TrainRecord {
                id: "express-101".into(),
                name: "Express 101".into(),
                parameters: TrainParameters {
                    start_time: ClockTime::parse("08:00"),
                    speed_kmh: 100.0,
                    price_per_km: 2.5,
                },
                stops: vec![
                    // Deliberately out of order; ingest must sort
                    RouteStop::new("station-002", 1, 0.0),
                    RouteStop::new("station-001", 0, 500.0),
                ],
            },
            TrainRecord {
                id: "rajdhani".into(),
                name: "Rajdhani Express".into(),
                parameters: TrainParameters {
                    start_time: ClockTime::parse("17:00"),
                    speed_kmh: 80.0,
                    price_per_km: 4.0,
                },
                stops: vec![
                    RouteStop::new("station-002", 0, 800.0),
                    RouteStop::new("station-004", 1, 0.0),
                ],
            },
        ];

        StaticRouteStore::from_data(stations, trains)
    }

    #[test]
    fn test_empty_store() {
        let store = StaticRouteStore::new();
        assert!(store.train_ids().is_empty());
        assert!(store.route_stops(&"express-101".into()).is_empty());
        assert_eq!(store.train_parameters(&"express-101".into()), None);
    }

    #[test]
    fn test_lookups() {
        let store = sample_store();

        assert!(store.get_train(&"rajdhani".into()).is_some());
        assert_eq!(
            store.station_name(&"station-001".into()).as_deref(),
            Some("Mumbai Central")
        );
        assert_eq!(store.station_name(&"station-999".into()), None);
    }

    #[test]
    fn test_ingest_sorts_stops_by_sequence() {
        let store = sample_store();
        let stops = store.route_stops(&"express-101".into());

        let sequences: Vec<u32> = stops.iter().map(|s| s.sequence).collect();
        assert_eq!(sequences, vec![0, 1]);
    }

    #[test]
    fn test_timetable_query() {
        let store = sample_store();
        let timetable = store
            .timetable(&"express-101".into(), DEFAULT_DWELL_MINUTES)
            .unwrap();

        assert_eq!(timetable.len(), 2);
        assert_eq!(timetable[0].departure.to_string(), "08:00");
        assert_eq!(timetable[1].arrival.to_string(), "13:00");
    }

    #[test]
    fn test_timetable_unknown_train() {
        let store = sample_store();
        assert_eq!(
            store.timetable(&"ghost".into(), DEFAULT_DWELL_MINUTES),
            Err(TimetableError::TrainNotFound("ghost".into()))
        );
    }

    #[test]
    fn test_find_journey_query() {
        let store = sample_store();
        let journey = store
            .find_journey(
                &"rajdhani".into(),
                &"station-002".into(),
                &"station-004".into(),
                DEFAULT_DWELL_MINUTES,
            )
            .unwrap();

        assert_eq!(journey.departure.to_string(), "17:00");
        // 800km at 80km/h = 600min
        assert_eq!(journey.arrival.to_string(), "03:00");
        assert_eq!(journey.duration.total_minutes, 600);
        assert_eq!(journey.price, 3200);
    }

    #[test]
    fn test_search_trains() {
        let store = sample_store();

        let hits = store.search_trains(&"station-002".into(), &"station-004".into());
        assert_eq!(hits, vec![TrainIdentifier::new("rajdhani")]);

        // Wrong direction never matches
        assert!(store
            .search_trains(&"station-004".into(), &"station-002".into())
            .is_empty());

        // Station pair not served together
        assert!(store
            .search_trains(&"station-001".into(), &"station-004".into())
            .is_empty());
    }
}
