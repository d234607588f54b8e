//! Concrete departure/arrival event instances.

use serde::{Deserialize, Serialize};

use crate::domain::{BlockSequenceId, RideId, Stop, TransitTime, TripId};

/// A concrete scheduled or real-time-adjusted event at a stop.
///
/// Every instance carries its scheduled times; predicted times are
/// present only when the real-time feed has something to say about the
/// trip. The "best" time for a given query resolves to the prediction
/// when real-time is requested and available, and to the schedule
/// otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrivalAndDeparture {
    /// The stop this event occurs at.
    pub stop: Stop,

    /// The trip being ridden.
    pub trip: TripId,

    /// The block sequence the trip belongs to, when the vehicle runs a
    /// chained multi-trip block.
    #[serde(default)]
    pub block_sequence: Option<BlockSequenceId>,

    /// Scheduled departure time.
    pub scheduled_departure: TransitTime,

    /// Scheduled arrival time.
    pub scheduled_arrival: TransitTime,

    /// Real-time predicted departure time, if any.
    #[serde(default)]
    pub predicted_departure: Option<TransitTime>,

    /// Real-time predicted arrival time, if any.
    #[serde(default)]
    pub predicted_arrival: Option<TransitTime>,
}

impl ArrivalAndDeparture {
    /// The best known departure time.
    ///
    /// When `use_realtime` is set and a prediction exists, the prediction
    /// wins; otherwise the scheduled time is used.
    pub fn best_departure_time(&self, use_realtime: bool) -> TransitTime {
        if use_realtime {
            self.predicted_departure.unwrap_or(self.scheduled_departure)
        } else {
            self.scheduled_departure
        }
    }

    /// The best known arrival time (see [`best_departure_time`]).
    ///
    /// [`best_departure_time`]: ArrivalAndDeparture::best_departure_time
    pub fn best_arrival_time(&self, use_realtime: bool) -> TransitTime {
        if use_realtime {
            self.predicted_arrival.unwrap_or(self.scheduled_arrival)
        } else {
            self.scheduled_arrival
        }
    }

    /// The vehicle run a traveler boards at this departure.
    ///
    /// The block sequence takes precedence over the bare trip when both
    /// are known.
    pub fn ride_id(&self) -> RideId {
        match &self.block_sequence {
            Some(block) => RideId::Block(block.clone()),
            None => RideId::Trip(self.trip.clone()),
        }
    }
}

/// An ordered candidate pair as returned by a departure query: the
/// departure instance at the origin stop and the matching arrival
/// instance at the destination stop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartureArrival {
    /// The departure event at the origin of the stop pair.
    pub departure: ArrivalAndDeparture,

    /// The arrival event at the destination of the stop pair.
    pub arrival: ArrivalAndDeparture,
}
