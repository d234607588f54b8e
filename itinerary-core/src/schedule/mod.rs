//! The departure query boundary.
//!
//! The traversal core does not own schedule or real-time data. It asks a
//! [`DepartureProvider`] for the next usable departures between a fixed
//! stop pair and turns each answer into a state transition. This module
//! defines that boundary: the event instance type the provider returns,
//! the provider trait itself, and an in-memory mock provider for tests
//! and development.

mod error;
mod instance;
mod mock;
mod provider;

pub use error::ScheduleError;
pub use instance::{ArrivalAndDeparture, DepartureArrival};
pub use mock::{MockBoard, MockScheduleProvider};
pub use provider::DepartureProvider;
