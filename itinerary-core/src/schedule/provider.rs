//! The departure provider trait.

use chrono::Duration;

use crate::domain::{StopId, TargetTime};

use super::error::ScheduleError;
use super::instance::DepartureArrival;

/// Source of candidate next departures for a fixed stop pair.
///
/// This is the boundary to the schedule/real-time subsystem. The
/// traversal core issues at most one query per traversal call and treats
/// any failure as fatal to that call.
///
/// This abstraction also allows the traversal core to be tested with
/// mock data.
///
/// Implementations must be safe to call concurrently from multiple
/// threads; the traversal core itself holds no locks.
pub trait DepartureProvider: Send + Sync {
    /// Get the next candidate departures between `origin` and
    /// `destination`.
    ///
    /// Returns (departure, arrival) instance pairs sorted ascending by
    /// departure time, at most `max_results` of them. Candidates may
    /// depart up to `lookahead` before the target's search time;
    /// `use_realtime` controls whether predicted times participate.
    ///
    /// An empty result is a normal outcome (a dead end), not an error.
    fn next_departures_for_stop_pair(
        &self,
        origin: &StopId,
        destination: &StopId,
        target: TargetTime,
        max_results: usize,
        use_realtime: bool,
        lookahead: Duration,
    ) -> Result<Vec<DepartureArrival>, ScheduleError>;
}
