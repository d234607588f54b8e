//! Traversal options.

use std::fmt;
use std::sync::Arc;

use chrono::Duration;

use crate::domain::TransitTime;

use super::weight::{LinearWaitCost, WaitCost};

/// Options consumed by edge traversal.
///
/// `wait_cost` is opaque to the traversal core: it is forwarded
/// unmodified to the weighting function, whose curve is configuration
/// owned by the outer search.
#[derive(Clone)]
pub struct TraverseOptions {
    /// Upper bound on candidate departures requested per traversal call.
    ///
    /// This is the only bound the traversal core places on its own work.
    pub num_itineraries: usize,

    /// Whether real-time adjustments (delays, cancellations) apply to
    /// candidate departure/arrival times.
    pub use_realtime: bool,

    /// Lookahead window in seconds: the tolerance for offering a
    /// first-boarding departure slightly before the requested time.
    pub lookahead_time_secs: i64,

    /// The system "now", used when applying real-time adjustments.
    pub current_time: TransitTime,

    /// Weighting preferences, forwarded unmodified to the wait-cost
    /// function.
    pub wait_cost: Arc<dyn WaitCost>,
}

impl TraverseOptions {
    /// Create options with the default bounds and wait-cost curve.
    pub fn new(current_time: TransitTime) -> Self {
        Self {
            num_itineraries: 3,
            use_realtime: true,
            lookahead_time_secs: 15 * 60,
            current_time,
            wait_cost: Arc::new(LinearWaitCost::default()),
        }
    }

    /// Set the candidate bound.
    pub fn with_num_itineraries(mut self, num_itineraries: usize) -> Self {
        self.num_itineraries = num_itineraries;
        self
    }

    /// Enable or disable real-time adjustments.
    pub fn with_realtime(mut self, use_realtime: bool) -> Self {
        self.use_realtime = use_realtime;
        self
    }

    /// Set the lookahead window in seconds.
    pub fn with_lookahead_secs(mut self, lookahead_time_secs: i64) -> Self {
        self.lookahead_time_secs = lookahead_time_secs;
        self
    }

    /// Set the wait-cost curve.
    pub fn with_wait_cost(mut self, wait_cost: Arc<dyn WaitCost>) -> Self {
        self.wait_cost = wait_cost;
        self
    }

    /// The lookahead window as a Duration.
    pub fn lookahead(&self) -> Duration {
        Duration::seconds(self.lookahead_time_secs)
    }
}

impl fmt::Debug for TraverseOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TraverseOptions")
            .field("num_itineraries", &self.num_itineraries)
            .field("use_realtime", &self.use_realtime)
            .field("lookahead_time_secs", &self.lookahead_time_secs)
            .field("current_time", &self.current_time)
            .finish_non_exhaustive()
    }
}
