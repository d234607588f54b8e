//! Domain types for the transit traversal core.
//!
//! This module contains the core domain model types that represent
//! validated schedule identifiers and instants. All types enforce their
//! invariants at construction time, so code that receives these types
//! can trust their validity.

mod stop;
mod time;
mod trip;

pub use stop::{InvalidStopId, Stop, StopId};
pub use time::{TargetTime, TransitTime};
pub use trip::{BlockSequenceId, InvalidTripId, RideId, TripId};
