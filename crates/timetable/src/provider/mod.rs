//! Route data stores.

pub mod static_store;

pub use static_store::{StaticRouteStore, StationRecord, TrainRecord};
