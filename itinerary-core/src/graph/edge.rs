//! The graph edge variants and their traversal logic.
//!
//! Two edge kinds make up the rider-facing part of the time-expanded
//! graph: a [`DepartureEdge`] meaning "wait at the origin of a fixed
//! stop pair for the next usable departure, then board it", and an
//! [`ArrivalEdge`] meaning "arrive at a destination stop after riding a
//! trip". The closed set is captured by [`TransitEdge`].

use std::sync::Arc;

use chrono::Duration;
use tracing::{debug, trace};

use crate::domain::{Stop, TargetTime, TransitTime};
use crate::schedule::{ArrivalAndDeparture, DepartureProvider, ScheduleError};

use super::options::TraverseOptions;
use super::results::{SuccessorResult, TraverseResults};
use super::state::TraversalState;
use super::vertex::{EdgeNarrative, Vertex};
use super::weight::Weight;

/// An ordered (origin, destination) stop combination defining one ride
/// segment. Set once when an edge is constructed, never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct StopPair {
    /// The boarding stop.
    pub origin: Stop,

    /// The alighting stop.
    pub destination: Stop,
}

impl StopPair {
    /// Create a stop pair.
    pub fn new(origin: Stop, destination: Stop) -> Self {
        Self {
            origin,
            destination,
        }
    }
}

/// Errors from edge traversal.
#[derive(Debug, thiserror::Error)]
pub enum TraversalError {
    /// The weighting function produced a negative or non-finite weight.
    ///
    /// This is an invariant violation in the weighting function or its
    /// inputs and is fatal to the traversal call; a negative weight must
    /// never reach the search frontier.
    #[error(
        "negative or non-finite weight {weight} for departure at {departure_time} \
         (dwell {dwell_seconds}s)"
    )]
    InvalidWeight {
        /// The offending weight.
        weight: f64,
        /// The candidate departure being weighted.
        departure_time: TransitTime,
        /// The dwell that produced the weight.
        dwell_seconds: i64,
    },

    /// The departure provider failed; propagated as-is, no local retry.
    #[error(transparent)]
    Schedule(#[from] ScheduleError),
}

/// Edge: wait at the origin of a fixed stop pair, then board one of the
/// next usable departures towards the destination.
///
/// Traversal branches: each usable candidate departure becomes its own
/// successor transition. The stop pair is fixed at construction, so one
/// edge value can serve concurrent traversal calls with different
/// states.
pub struct DepartureEdge {
    stop_pair: StopPair,
    provider: Arc<dyn DepartureProvider>,
}

impl DepartureEdge {
    /// Create a departure edge over a fixed stop pair, querying the
    /// given provider.
    pub fn new(stop_pair: StopPair, provider: Arc<dyn DepartureProvider>) -> Self {
        Self {
            stop_pair,
            provider,
        }
    }

    /// The fixed stop pair of this edge.
    pub fn stop_pair(&self) -> &StopPair {
        &self.stop_pair
    }

    /// Expand the next usable departures for this stop pair into
    /// successor transitions.
    ///
    /// Only the very first boarding of an itinerary may exploit the
    /// lookahead window to catch a departure slightly before the
    /// requested time; later boardings must advance time monotonically,
    /// so the window collapses to zero once `state` has boarded
    /// anything.
    ///
    /// An empty result is a dead end, not an error. The boarding count
    /// of successor states is NOT incremented here; that bookkeeping
    /// belongs to the outer search (see
    /// [`TraversalState::with_boarding`]).
    pub fn traverse(
        &self,
        state: &TraversalState,
        options: &TraverseOptions,
    ) -> Result<TraverseResults, TraversalError> {
        let lookahead = if state.boarding_count() == 0 {
            options.lookahead()
        } else {
            Duration::zero()
        };

        let target = TargetTime::new(state.time(), options.current_time);

        let pairs = self.provider.next_departures_for_stop_pair(
            &self.stop_pair.origin.id,
            &self.stop_pair.destination.id,
            target,
            options.num_itineraries,
            options.use_realtime,
            lookahead,
        )?;

        trace!(
            origin = %self.stop_pair.origin.id,
            destination = %self.stop_pair.destination.id,
            candidates = pairs.len(),
            "departure query answered"
        );

        let from = Vertex::Departure {
            stop_pair: self.stop_pair.clone(),
        };

        // Lower admission bound, in the same millisecond unit as state
        // time. There is no explicit upper bound beyond what the
        // provider itself returns.
        let earliest = state.time().minus_seconds(lookahead.num_seconds());

        let mut results = TraverseResults::new();

        for pair in pairs {
            let departure_time = pair.departure.best_departure_time(options.use_realtime);
            if departure_time < earliest {
                continue;
            }

            // A lookahead departure would give a negative dwell; the
            // traveler does not actually wait, so it clamps to zero.
            let dwell_seconds = departure_time.seconds_since(state.time()).max(0);

            let raw = options.wait_cost.weight_for_wait(dwell_seconds, state);
            let weight =
                Weight::new(raw).map_err(|_| TraversalError::InvalidWeight {
                    weight: raw,
                    departure_time,
                    dwell_seconds,
                })?;

            let next = state.advanced(departure_time, pair.departure.ride_id());

            let to = Vertex::BlockDeparture {
                stop_pair: self.stop_pair.clone(),
                departure: pair.departure,
            };

            results.push(SuccessorResult {
                weight,
                state: next,
                narrative: EdgeNarrative::new(from.clone(), to),
            });
        }

        debug!(
            origin = %self.stop_pair.origin.id,
            destination = %self.stop_pair.destination.id,
            successors = results.len(),
            "expanded departure edge"
        );

        Ok(results)
    }

    /// Backward traversal: a single zero-weight passthrough carrying
    /// only the backward narrative.
    ///
    /// Departures are NOT expanded in this direction, unlike the forward
    /// traversal. Whether backward expansion is intentionally
    /// unsupported for this edge kind is unresolved with the domain
    /// owners; until that settles, this pins the asymmetric behavior.
    pub fn traverse_back(
        &self,
        state: &TraversalState,
        _options: &TraverseOptions,
    ) -> Result<TraverseResults, TraversalError> {
        let narrative = EdgeNarrative::dangling(Vertex::Departure {
            stop_pair: self.stop_pair.clone(),
        });

        Ok(TraverseResults::single(SuccessorResult {
            weight: Weight::ZERO,
            state: state.clone(),
            narrative,
        }))
    }
}

/// Edge: arrive at a destination stop after riding a trip.
///
/// A pure bookkeeping transition: always exactly one successor, zero
/// weight, state unchanged. Forward and backward traversal behave
/// identically.
pub struct ArrivalEdge {
    instance: ArrivalAndDeparture,
}

impl ArrivalEdge {
    /// Create an arrival edge for the given arrival instance.
    pub fn new(instance: ArrivalAndDeparture) -> Self {
        Self { instance }
    }

    /// The arrival instance this edge marks.
    pub fn instance(&self) -> &ArrivalAndDeparture {
        &self.instance
    }

    /// Mark the arrival: one zero-weight successor with the input state.
    pub fn traverse(
        &self,
        state: &TraversalState,
        _options: &TraverseOptions,
    ) -> Result<TraverseResults, TraversalError> {
        Ok(TraverseResults::single(SuccessorResult {
            weight: Weight::ZERO,
            state: state.clone(),
            narrative: self.narrative(state.time()),
        }))
    }

    /// Identical to the forward traversal.
    pub fn traverse_back(
        &self,
        state: &TraversalState,
        options: &TraverseOptions,
    ) -> Result<TraverseResults, TraversalError> {
        self.traverse(state, options)
    }

    fn narrative(&self, time: TransitTime) -> EdgeNarrative {
        let from = Vertex::BlockArrival {
            instance: self.instance.clone(),
        };
        let to = Vertex::StopArrival {
            stop: self.instance.stop.clone(),
            time,
        };
        EdgeNarrative::new(from, to)
    }
}

/// The closed set of edge variants in the time-expanded graph.
pub enum TransitEdge {
    /// Wait-and-board edge over a fixed stop pair.
    Departure(DepartureEdge),
    /// Arrival bookkeeping edge.
    Arrival(ArrivalEdge),
}

impl TransitEdge {
    /// Forward traversal of whichever edge variant this is.
    pub fn traverse(
        &self,
        state: &TraversalState,
        options: &TraverseOptions,
    ) -> Result<TraverseResults, TraversalError> {
        match self {
            TransitEdge::Departure(edge) => edge.traverse(state, options),
            TransitEdge::Arrival(edge) => edge.traverse(state, options),
        }
    }

    /// Backward traversal of whichever edge variant this is.
    pub fn traverse_back(
        &self,
        state: &TraversalState,
        options: &TraverseOptions,
    ) -> Result<TraverseResults, TraversalError> {
        match self {
            TransitEdge::Departure(edge) => edge.traverse_back(state, options),
            TransitEdge::Arrival(edge) => edge.traverse_back(state, options),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BlockSequenceId, RideId, StopId, TripId};
    use crate::schedule::{DepartureArrival, MockScheduleProvider};

    fn stop(id: &str) -> Stop {
        Stop::new(StopId::parse(id).unwrap())
    }

    fn stop_pair() -> StopPair {
        StopPair::new(stop("1_origin"), stop("1_dest"))
    }

    fn candidate(trip: &str, dep_millis: i64) -> DepartureArrival {
        let departure = ArrivalAndDeparture {
            stop: stop("1_origin"),
            trip: TripId::parse(trip).unwrap(),
            block_sequence: None,
            scheduled_departure: TransitTime::from_millis(dep_millis),
            scheduled_arrival: TransitTime::from_millis(dep_millis + 600_000),
            predicted_departure: None,
            predicted_arrival: None,
        };
        let arrival = ArrivalAndDeparture {
            stop: stop("1_dest"),
            scheduled_departure: TransitTime::from_millis(dep_millis + 600_000),
            ..departure.clone()
        };
        DepartureArrival { departure, arrival }
    }

    fn edge_with(candidates: Vec<DepartureArrival>) -> DepartureEdge {
        let mut provider = MockScheduleProvider::new();
        provider.add_pairs(
            StopId::parse("1_origin").unwrap(),
            StopId::parse("1_dest").unwrap(),
            candidates,
        );
        DepartureEdge::new(stop_pair(), Arc::new(provider))
    }

    fn options() -> TraverseOptions {
        TraverseOptions::new(TransitTime::from_millis(100_000))
            .with_num_itineraries(10)
            .with_realtime(false)
            .with_lookahead_secs(30)
    }

    #[test]
    fn first_boarding_admits_lookahead_departure() {
        // state.time = 100000ms, lookahead = 30s, so the lower admission
        // bound is 70000ms: both candidates pass.
        let edge = edge_with(vec![candidate("1_a", 95_000), candidate("1_b", 130_000)]);
        let state = TraversalState::new(TransitTime::from_millis(100_000));

        let results = edge.traverse(&state, &options()).unwrap();
        assert_eq!(results.len(), 2);

        let a = &results.as_slice()[0];
        assert_eq!(a.state.time(), TransitTime::from_millis(95_000));
        assert!(a.state.is_lookahead_itinerary());

        let b = &results.as_slice()[1];
        assert_eq!(b.state.time(), TransitTime::from_millis(130_000));
        assert!(!b.state.is_lookahead_itinerary());

        // Zero dwell for the lookahead departure, 30s for the later
        // one: monotone weighting orders them.
        assert!(a.weight.value() <= b.weight.value());
        assert_eq!(a.weight.value(), 0.0);
    }

    #[test]
    fn later_boardings_get_no_lookahead() {
        let edge = edge_with(vec![candidate("1_a", 95_000), candidate("1_b", 130_000)]);
        let state = TraversalState::new(TransitTime::from_millis(100_000)).with_boarding();

        let results = edge.traverse(&state, &options()).unwrap();
        assert_eq!(results.len(), 1);

        let only = &results.as_slice()[0];
        assert_eq!(only.state.time(), TransitTime::from_millis(130_000));
        assert!(!only.state.is_lookahead_itinerary());
    }

    #[test]
    fn emits_one_successor_per_valid_candidate() {
        let edge = edge_with(vec![
            candidate("1_a", 110_000),
            candidate("1_b", 120_000),
            candidate("1_c", 130_000),
        ]);
        let state = TraversalState::new(TransitTime::from_millis(100_000));

        let results = edge.traverse(&state, &options()).unwrap();
        assert_eq!(results.len(), 3);

        // Each successor is distinct and time matches its candidate
        let times: Vec<i64> = results
            .iter()
            .map(|r| r.state.time().millis())
            .collect();
        assert_eq!(times, vec![110_000, 120_000, 130_000]);
    }

    #[test]
    fn empty_candidate_list_is_a_dead_end() {
        let edge = edge_with(Vec::new());
        let state = TraversalState::new(TransitTime::from_millis(100_000));

        let results = edge.traverse(&state, &options()).unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn successor_appends_ride_and_preserves_predecessor() {
        let edge = edge_with(vec![candidate("1_a", 130_000)]);
        let state = TraversalState::new(TransitTime::from_millis(100_000));

        let results = edge.traverse(&state, &options()).unwrap();
        let successor = &results.as_slice()[0];

        assert_eq!(successor.state.trip_sequence().len(), 1);
        assert_eq!(
            successor.state.trip_sequence()[0],
            RideId::Trip(TripId::parse("1_a").unwrap())
        );
        // Edge does not touch the boarding count
        assert_eq!(successor.state.boarding_count(), 0);
        assert!(state.trip_sequence().is_empty());
    }

    #[test]
    fn block_sequence_takes_precedence_in_trip_sequence() {
        let mut with_block = candidate("1_a", 130_000);
        with_block.departure.block_sequence =
            Some(BlockSequenceId::parse("1_block-7").unwrap());

        let edge = edge_with(vec![with_block]);
        let state = TraversalState::new(TransitTime::from_millis(100_000));

        let results = edge.traverse(&state, &options()).unwrap();
        assert_eq!(
            results.as_slice()[0].state.trip_sequence()[0],
            RideId::Block(BlockSequenceId::parse("1_block-7").unwrap())
        );
    }

    #[test]
    fn narrative_connects_departure_to_boarded_vertex() {
        let edge = edge_with(vec![candidate("1_a", 130_000)]);
        let state = TraversalState::new(TransitTime::from_millis(100_000));

        let results = edge.traverse(&state, &options()).unwrap();
        let narrative = &results.as_slice()[0].narrative;

        assert!(matches!(narrative.from, Vertex::Departure { .. }));
        assert!(matches!(narrative.to, Some(Vertex::BlockDeparture { .. })));
    }

    #[test]
    fn candidate_bound_limits_branching() {
        let edge = edge_with(vec![
            candidate("1_a", 110_000),
            candidate("1_b", 120_000),
            candidate("1_c", 130_000),
        ]);
        let state = TraversalState::new(TransitTime::from_millis(100_000));
        let options = options().with_num_itineraries(2);

        let results = edge.traverse(&state, &options).unwrap();
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn negative_weight_aborts_the_traversal() {
        struct BrokenCost;
        impl crate::graph::WaitCost for BrokenCost {
            fn weight_for_wait(&self, _dwell_seconds: i64, _state: &TraversalState) -> f64 {
                -1.0
            }
        }

        let edge = edge_with(vec![candidate("1_a", 130_000)]);
        let state = TraversalState::new(TransitTime::from_millis(100_000));
        let options = options().with_wait_cost(Arc::new(BrokenCost));

        let err = edge.traverse(&state, &options).unwrap_err();
        assert!(matches!(err, TraversalError::InvalidWeight { .. }));
    }

    #[test]
    fn traverse_back_is_a_narrative_only_passthrough() {
        let edge = edge_with(vec![candidate("1_a", 130_000)]);
        let state = TraversalState::new(TransitTime::from_millis(100_000));

        let results = edge.traverse_back(&state, &options()).unwrap();
        assert_eq!(results.len(), 1);

        let only = &results.as_slice()[0];
        assert_eq!(only.weight.value(), 0.0);
        assert_eq!(only.state, state);
        assert!(only.narrative.to.is_none());
    }

    #[test]
    fn arrival_edge_is_zero_cost_identity() {
        let instance = candidate("1_a", 130_000).arrival;
        let edge = ArrivalEdge::new(instance);
        let state = TraversalState::new(TransitTime::from_millis(100_000));

        for results in [
            edge.traverse(&state, &options()).unwrap(),
            edge.traverse_back(&state, &options()).unwrap(),
        ] {
            assert_eq!(results.len(), 1);
            let only = &results.as_slice()[0];
            assert_eq!(only.weight.value(), 0.0);
            assert_eq!(only.state, state);
            assert!(matches!(only.narrative.from, Vertex::BlockArrival { .. }));
            match &only.narrative.to {
                Some(Vertex::StopArrival { time, .. }) => {
                    assert_eq!(*time, state.time());
                }
                other => panic!("unexpected narrative target: {other:?}"),
            }
        }
    }

    #[test]
    fn transit_edge_dispatches_both_variants() {
        let state = TraversalState::new(TransitTime::from_millis(100_000));

        let departure = TransitEdge::Departure(edge_with(vec![candidate("1_a", 130_000)]));
        assert_eq!(departure.traverse(&state, &options()).unwrap().len(), 1);
        assert_eq!(
            departure.traverse_back(&state, &options()).unwrap().len(),
            1
        );

        let arrival = TransitEdge::Arrival(ArrivalEdge::new(candidate("1_a", 130_000).arrival));
        assert_eq!(arrival.traverse(&state, &options()).unwrap().len(), 1);
    }

    #[test]
    fn provider_failure_propagates() {
        struct FailingProvider;
        impl DepartureProvider for FailingProvider {
            fn next_departures_for_stop_pair(
                &self,
                _origin: &StopId,
                _destination: &StopId,
                _target: TargetTime,
                _max_results: usize,
                _use_realtime: bool,
                _lookahead: Duration,
            ) -> Result<Vec<DepartureArrival>, ScheduleError> {
                Err(ScheduleError::Unavailable {
                    message: "feed down".into(),
                })
            }
        }

        let edge = DepartureEdge::new(stop_pair(), Arc::new(FailingProvider));
        let state = TraversalState::new(TransitTime::from_millis(100_000));

        let err = edge.traverse(&state, &options()).unwrap_err();
        assert!(matches!(err, TraversalError::Schedule(_)));
    }

    /// Plays the role of the outer search for a two-leg itinerary:
    /// expand the first departure edge, do the boarding-count
    /// bookkeeping, expand a second edge from the successor, then mark
    /// the arrival.
    #[test]
    fn two_leg_expansion_driven_like_an_outer_search() {
        let mut provider = MockScheduleProvider::new();
        provider.add_pairs(
            StopId::parse("1_origin").unwrap(),
            StopId::parse("1_mid").unwrap(),
            vec![candidate("1_first", 95_000)],
        );
        provider.add_pairs(
            StopId::parse("1_mid").unwrap(),
            StopId::parse("1_dest").unwrap(),
            vec![
                // Earlier than the transfer time: must be rejected,
                // lookahead only applies to the first boarding.
                candidate("1_missed", 90_000),
                candidate("1_second", 800_000),
            ],
        );
        let provider: Arc<dyn DepartureProvider> = Arc::new(provider);

        let first_leg = DepartureEdge::new(
            StopPair::new(stop("1_origin"), stop("1_mid")),
            Arc::clone(&provider),
        );
        let second_leg = DepartureEdge::new(
            StopPair::new(stop("1_mid"), stop("1_dest")),
            Arc::clone(&provider),
        );

        let start = TraversalState::new(TransitTime::from_millis(100_000));

        let first = first_leg.traverse(&start, &options()).unwrap();
        assert_eq!(first.len(), 1);
        let boarded = first.as_slice()[0].state.with_boarding();
        assert!(boarded.is_lookahead_itinerary());
        assert_eq!(boarded.boarding_count(), 1);

        // Expand the onward edge from the boarded state; the earlier
        // candidate is now outside the (collapsed) window.
        let second = second_leg.traverse(&boarded, &options()).unwrap();
        assert_eq!(second.len(), 1);

        let onward = &second.as_slice()[0];
        assert_eq!(onward.state.time(), TransitTime::from_millis(800_000));
        assert_eq!(onward.state.trip_sequence().len(), 2);
        // Lookahead flag survives later monotonic boardings
        assert!(onward.state.is_lookahead_itinerary());
        assert!(onward.weight.value() > 0.0);

        // Arrival closes the itinerary at zero cost
        let arrival = ArrivalEdge::new(candidate("1_second", 800_000).arrival);
        let done = arrival.traverse(&onward.state, &options()).unwrap();
        assert_eq!(done.len(), 1);
        assert_eq!(done.as_slice()[0].weight.value(), 0.0);
    }

    #[test]
    fn realtime_prediction_moves_the_boarding_time() {
        let mut delayed = candidate("1_a", 110_000);
        delayed.departure.predicted_departure = Some(TransitTime::from_millis(140_000));

        let edge = edge_with(vec![delayed]);
        let state = TraversalState::new(TransitTime::from_millis(100_000));

        let scheduled = edge
            .traverse(&state, &options().with_realtime(false))
            .unwrap();
        assert_eq!(
            scheduled.as_slice()[0].state.time(),
            TransitTime::from_millis(110_000)
        );

        let realtime = edge
            .traverse(&state, &options().with_realtime(true))
            .unwrap();
        assert_eq!(
            realtime.as_slice()[0].state.time(),
            TransitTime::from_millis(140_000)
        );
    }
}
