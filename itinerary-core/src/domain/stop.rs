//! Stop identity types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an invalid stop identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid stop id: {reason}")]
pub struct InvalidStopId {
    reason: &'static str,
}

/// A validated stop identifier.
///
/// Stop ids come from the schedule data (typically `agency_stopcode`
/// style strings). This type guarantees that any `StopId` value is
/// non-empty and contains no whitespace.
///
/// # Examples
///
/// ```
/// use itinerary_core::domain::StopId;
///
/// let stop = StopId::parse("1_75403").unwrap();
/// assert_eq!(stop.as_str(), "1_75403");
///
/// // Empty and whitespace-containing ids are rejected
/// assert!(StopId::parse("").is_err());
/// assert!(StopId::parse("1 75403").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StopId(String);

impl StopId {
    /// Parse a stop id from a string.
    ///
    /// The input must be non-empty and contain no whitespace.
    pub fn parse(s: &str) -> Result<Self, InvalidStopId> {
        if s.is_empty() {
            return Err(InvalidStopId {
                reason: "must not be empty",
            });
        }

        if s.chars().any(char::is_whitespace) {
            return Err(InvalidStopId {
                reason: "must not contain whitespace",
            });
        }

        Ok(StopId(s.to_string()))
    }

    /// Returns the stop id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for StopId {
    type Error = InvalidStopId;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        StopId::parse(&s)
    }
}

impl From<StopId> for String {
    fn from(id: StopId) -> String {
        id.0
    }
}

impl fmt::Debug for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StopId({})", self.0)
    }
}

impl fmt::Display for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A stop together with its optional human-readable name.
///
/// Schedule data does not always carry a display name for every stop.
/// Display code falls back to the raw identifier rather than failing,
/// so a missing name is never a reason to abort a traversal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stop {
    /// The stop identifier.
    pub id: StopId,

    /// Human-readable stop name, if the schedule data provides one.
    pub name: Option<String>,
}

impl Stop {
    /// Create a stop with no display name.
    pub fn new(id: StopId) -> Self {
        Self { id, name: None }
    }

    /// Attach a display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// The best available display text: the name when present, otherwise
    /// the raw identifier.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or_else(|| self.id.as_str())
    }
}
