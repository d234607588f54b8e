//! Display-facing vertex identities and edge narratives.
//!
//! Narratives exist for itinerary rendering only: they pair the origin
//! and destination vertex of a transition and carry no cost information.

use std::fmt;

use crate::domain::{Stop, TransitTime};
use crate::schedule::ArrivalAndDeparture;

use super::edge::StopPair;

/// A vertex identity in the time-expanded graph, as shown to travelers.
#[derive(Debug, Clone, PartialEq)]
pub enum Vertex {
    /// Waiting at the origin of a stop pair for a departure.
    Departure {
        /// The stop pair being waited on.
        stop_pair: StopPair,
    },

    /// Boarded a specific vehicle run departing the origin of a stop
    /// pair.
    BlockDeparture {
        /// The stop pair being ridden.
        stop_pair: StopPair,
        /// The boarded departure event.
        departure: ArrivalAndDeparture,
    },

    /// Riding a block, about to arrive at a stop.
    BlockArrival {
        /// The arrival event at the stop.
        instance: ArrivalAndDeparture,
    },

    /// Arrived at a stop at a concrete time.
    StopArrival {
        /// The stop arrived at.
        stop: Stop,
        /// The arrival time.
        time: TransitTime,
    },
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Vertex::Departure { stop_pair } => write!(
                f,
                "departure {} -> {}",
                stop_pair.origin.display_name(),
                stop_pair.destination.display_name()
            ),
            Vertex::BlockDeparture {
                stop_pair,
                departure,
            } => write!(
                f,
                "boarded {} at {}",
                departure.ride_id(),
                stop_pair.origin.display_name()
            ),
            Vertex::BlockArrival { instance } => write!(
                f,
                "riding {} towards {}",
                instance.ride_id(),
                instance.stop.display_name()
            ),
            Vertex::StopArrival { stop, time } => {
                write!(f, "arrived at {} at {}", stop.display_name(), time)
            }
        }
    }
}

/// The origin/destination vertex pairing of one transition, for
/// itinerary display.
///
/// A backward narrative may lack a resolved target vertex.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeNarrative {
    /// The vertex the transition leaves.
    pub from: Vertex,

    /// The vertex the transition reaches, when resolved.
    pub to: Option<Vertex>,
}

impl EdgeNarrative {
    /// Create a narrative connecting two vertices.
    pub fn new(from: Vertex, to: Vertex) -> Self {
        Self {
            from,
            to: Some(to),
        }
    }

    /// Create a narrative with no resolved target vertex.
    pub fn dangling(from: Vertex) -> Self {
        Self { from, to: None }
    }
}

impl fmt::Display for EdgeNarrative {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.to {
            Some(to) => write!(f, "{} => {}", self.from, to),
            None => write!(f, "{} => ?", self.from),
        }
    }
}
