//! Trip and block-sequence identity types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an invalid trip or block-sequence id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid trip id: {reason}")]
pub struct InvalidTripId {
    reason: &'static str,
}

fn validate(s: &str) -> Result<(), InvalidTripId> {
    if s.is_empty() {
        return Err(InvalidTripId {
            reason: "must not be empty",
        });
    }

    if s.chars().any(char::is_whitespace) {
        return Err(InvalidTripId {
            reason: "must not contain whitespace",
        });
    }

    Ok(())
}

/// A validated identifier for a single scheduled trip.
///
/// # Examples
///
/// ```
/// use itinerary_core::domain::TripId;
///
/// let trip = TripId::parse("1_604511").unwrap();
/// assert_eq!(trip.as_str(), "1_604511");
/// assert!(TripId::parse("").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TripId(String);

impl TripId {
    /// Parse a trip id from a string.
    pub fn parse(s: &str) -> Result<Self, InvalidTripId> {
        validate(s)?;
        Ok(TripId(s.to_string()))
    }

    /// Returns the trip id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TripId {
    type Error = InvalidTripId;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        TripId::parse(&s)
    }
}

impl From<TripId> for String {
    fn from(id: TripId) -> String {
        id.0
    }
}

impl fmt::Debug for TripId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TripId({})", self.0)
    }
}

impl fmt::Display for TripId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A validated identifier for a block sequence: a chained run of trips
/// operated by one vehicle, which a traveler can ride through without
/// reboarding.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BlockSequenceId(String);

impl BlockSequenceId {
    /// Parse a block-sequence id from a string.
    pub fn parse(s: &str) -> Result<Self, InvalidTripId> {
        validate(s)?;
        Ok(BlockSequenceId(s.to_string()))
    }

    /// Returns the block-sequence id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for BlockSequenceId {
    type Error = InvalidTripId;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        BlockSequenceId::parse(&s)
    }
}

impl From<BlockSequenceId> for String {
    fn from(id: BlockSequenceId) -> String {
        id.0
    }
}

impl fmt::Debug for BlockSequenceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BlockSequenceId({})", self.0)
    }
}

impl fmt::Display for BlockSequenceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifies the vehicle run a traveler boards.
///
/// A block sequence denotes a chained multi-trip run and is preferred
/// over a bare trip reference when both are known for a departure.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RideId {
    /// A chained multi-trip block run.
    Block(BlockSequenceId),
    /// A single scheduled trip.
    Trip(TripId),
}

impl fmt::Display for RideId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RideId::Block(id) => write!(f, "block {id}"),
            RideId::Trip(id) => write!(f, "trip {id}"),
        }
    }
}
