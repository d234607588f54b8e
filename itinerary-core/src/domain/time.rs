//! Instants for schedule and traversal times.
//!
//! Schedule data and search states measure time in epoch milliseconds.
//! The millisecond unit matters: the departure admission filter compares
//! millisecond instants against a lookahead window expressed in seconds,
//! so the conversion lives here rather than at call sites.

use std::fmt;

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// An instant in epoch milliseconds.
///
/// # Examples
///
/// ```
/// use itinerary_core::domain::TransitTime;
///
/// let t = TransitTime::from_millis(100_000);
/// assert_eq!(t.millis(), 100_000);
/// assert_eq!(t.minus_seconds(30), TransitTime::from_millis(70_000));
/// assert!(TransitTime::from_millis(95_000) < t);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TransitTime(i64);

impl TransitTime {
    /// Create an instant from epoch milliseconds.
    pub const fn from_millis(millis: i64) -> Self {
        TransitTime(millis)
    }

    /// Returns the instant as epoch milliseconds.
    pub const fn millis(self) -> i64 {
        self.0
    }

    /// Create an instant from a chrono UTC datetime.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        TransitTime(dt.timestamp_millis())
    }

    /// Convert to a chrono UTC datetime.
    ///
    /// Returns `None` for instants outside chrono's representable range.
    pub fn to_datetime(self) -> Option<DateTime<Utc>> {
        Utc.timestamp_millis_opt(self.0).single()
    }

    /// The instant `seconds` earlier, saturating at the numeric limits.
    pub fn minus_seconds(self, seconds: i64) -> Self {
        TransitTime(self.0.saturating_sub(seconds.saturating_mul(1000)))
    }

    /// The instant `seconds` later, saturating at the numeric limits.
    pub fn plus_seconds(self, seconds: i64) -> Self {
        TransitTime(self.0.saturating_add(seconds.saturating_mul(1000)))
    }

    /// Whole seconds elapsed since `earlier`, truncated toward zero.
    ///
    /// Negative when `self` is before `earlier`.
    pub fn seconds_since(self, earlier: TransitTime) -> i64 {
        (self.0 - earlier.0) / 1000
    }
}

impl fmt::Debug for TransitTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TransitTime({self})")
    }
}

impl fmt::Display for TransitTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_datetime() {
            Some(dt) => write!(f, "{}", dt.format("%Y-%m-%dT%H:%M:%S%.3fZ")),
            None => write!(f, "{}ms", self.0),
        }
    }
}

/// The pair of times bounding a departure query: the requested search
/// time and the system "now".
///
/// The search time decides which candidate departures are eligible; the
/// current time decides how real-time adjustments apply to them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetTime {
    /// The requested search time (a state's current time).
    pub search_time: TransitTime,

    /// The system "now" when the query is made.
    pub current_time: TransitTime,
}

impl TargetTime {
    /// Create a target time from a search time and the system now.
    pub fn new(search_time: TransitTime, current_time: TransitTime) -> Self {
        Self {
            search_time,
            current_time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn millis_round_trip() {
        let t = TransitTime::from_millis(1_700_000_000_000);
        assert_eq!(t.millis(), 1_700_000_000_000);

        let dt = t.to_datetime().unwrap();
        assert_eq!(TransitTime::from_datetime(dt), t);
    }

    #[test]
    fn second_arithmetic() {
        let t = TransitTime::from_millis(100_000);
        assert_eq!(t.minus_seconds(30).millis(), 70_000);
        assert_eq!(t.plus_seconds(30).millis(), 130_000);
        assert_eq!(t.minus_seconds(0), t);
    }

    #[test]
    fn arithmetic_saturates() {
        let t = TransitTime::from_millis(i64::MIN + 5);
        assert_eq!(t.minus_seconds(10).millis(), i64::MIN);

        let t = TransitTime::from_millis(i64::MAX - 5);
        assert_eq!(t.plus_seconds(10).millis(), i64::MAX);
    }

    #[test]
    fn seconds_since_truncates_toward_zero() {
        let earlier = TransitTime::from_millis(100_000);

        assert_eq!(TransitTime::from_millis(130_000).seconds_since(earlier), 30);
        assert_eq!(TransitTime::from_millis(100_999).seconds_since(earlier), 0);
        assert_eq!(TransitTime::from_millis(95_000).seconds_since(earlier), -5);
        assert_eq!(TransitTime::from_millis(99_001).seconds_since(earlier), 0);
    }

    #[test]
    fn ordering() {
        assert!(TransitTime::from_millis(95_000) < TransitTime::from_millis(100_000));
        assert!(TransitTime::from_millis(130_000) > TransitTime::from_millis(100_000));
    }

    #[test]
    fn display_format() {
        let t = TransitTime::from_millis(0);
        assert_eq!(t.to_string(), "1970-01-01T00:00:00.000Z");
    }
}
