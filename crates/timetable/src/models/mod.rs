//! Route data models, computed schedule types, and the store seam.

pub mod traits;
pub mod types;

// Re-exports for convenience
pub use traits::RouteStore;
pub use types::{
    Journey, Result, RouteStop, StopSchedule, TimetableError, TrainParameters,
    DEFAULT_DWELL_MINUTES,
};
