//! Immutable traversal state.

use crate::domain::{RideId, TransitTime};

/// An immutable snapshot of search progress at one point of a
/// time-expanded graph.
///
/// A state is never mutated after creation; every transition produces a
/// new value. The trip sequence only ever grows by append.
///
/// # Examples
///
/// ```
/// use itinerary_core::domain::{TransitTime, TripId, RideId};
/// use itinerary_core::graph::TraversalState;
///
/// let start = TraversalState::new(TransitTime::from_millis(100_000));
/// let ride = RideId::Trip(TripId::parse("1_604511").unwrap());
///
/// let next = start.advanced(TransitTime::from_millis(130_000), ride);
/// assert_eq!(next.time(), TransitTime::from_millis(130_000));
/// assert_eq!(next.trip_sequence().len(), 1);
///
/// // The predecessor is untouched
/// assert_eq!(start.time(), TransitTime::from_millis(100_000));
/// assert!(start.trip_sequence().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraversalState {
    /// Current time of the traveler.
    time: TransitTime,

    /// Number of vehicle boardings so far in the search.
    boarding_count: u32,

    /// The vehicle runs ridden so far, in boarding order.
    trip_sequence: Vec<RideId>,

    /// Whether this itinerary exploited the lookahead window, i.e. it
    /// boarded a departure earlier than the originally requested time.
    lookahead_itinerary: bool,
}

impl TraversalState {
    /// Create a fresh state at the given time, with no boardings and an
    /// empty trip sequence.
    pub fn new(time: TransitTime) -> Self {
        Self {
            time,
            boarding_count: 0,
            trip_sequence: Vec::new(),
            lookahead_itinerary: false,
        }
    }

    /// Current time of this state.
    pub fn time(&self) -> TransitTime {
        self.time
    }

    /// Number of vehicle boardings so far.
    pub fn boarding_count(&self) -> u32 {
        self.boarding_count
    }

    /// The vehicle runs ridden so far, in boarding order.
    pub fn trip_sequence(&self) -> &[RideId] {
        &self.trip_sequence
    }

    /// Whether this itinerary exploited the lookahead window.
    pub fn is_lookahead_itinerary(&self) -> bool {
        self.lookahead_itinerary
    }

    /// The successor state for boarding a departure at `departure_time`
    /// riding `ride`.
    ///
    /// The new state's time is the departure time and the ride is
    /// appended to the trip sequence. When the departure is earlier than
    /// this state's time it can only have been admitted by the lookahead
    /// window, so the lookahead flag is set; otherwise the flag is
    /// inherited.
    ///
    /// The boarding count is NOT incremented here: that bookkeeping is
    /// owned by the outer search, via [`with_boarding`].
    ///
    /// [`with_boarding`]: TraversalState::with_boarding
    pub fn advanced(&self, departure_time: TransitTime, ride: RideId) -> Self {
        let mut trip_sequence = Vec::with_capacity(self.trip_sequence.len() + 1);
        trip_sequence.extend_from_slice(&self.trip_sequence);
        trip_sequence.push(ride);

        Self {
            time: departure_time,
            boarding_count: self.boarding_count,
            trip_sequence,
            lookahead_itinerary: self.lookahead_itinerary || departure_time < self.time,
        }
    }

    /// A copy of this state with the boarding count incremented.
    ///
    /// Called by the outer search when it enqueues a successor produced
    /// by a departure edge; the edges themselves never touch the count.
    pub fn with_boarding(&self) -> Self {
        Self {
            boarding_count: self.boarding_count + 1,
            ..self.clone()
        }
    }
}
