//! Traversal weights and the wait-cost contract.
//!
//! The exact penalty curve for waiting is a configuration concern of the
//! outer search; the traversal core only depends on the contract spelled
//! out on [`WaitCost`]. The [`Weight`] newtype enforces the one invariant
//! the search cannot live without: weights are never negative.

use std::fmt;

use super::state::TraversalState;

/// Error returned when a computed weight violates the weight invariant.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("invalid weight {value}: {reason}")]
pub struct InvalidWeight {
    /// The offending value.
    pub value: f64,
    reason: &'static str,
}

/// A non-negative, finite traversal weight.
///
/// Zero weight is reserved for true no-cost transitions: arrivals and
/// lookahead-free immediate departures.
///
/// # Examples
///
/// ```
/// use itinerary_core::graph::Weight;
///
/// assert_eq!(Weight::new(2.5).unwrap().value(), 2.5);
/// assert_eq!(Weight::ZERO.value(), 0.0);
/// assert!(Weight::new(-0.1).is_err());
/// assert!(Weight::new(f64::NAN).is_err());
/// ```
#[derive(Clone, Copy, PartialEq, PartialOrd)]
pub struct Weight(f64);

impl Weight {
    /// The zero weight.
    pub const ZERO: Weight = Weight(0.0);

    /// Validate a raw weight value.
    ///
    /// Rejects negative, NaN, and infinite values.
    pub fn new(value: f64) -> Result<Self, InvalidWeight> {
        if !value.is_finite() {
            return Err(InvalidWeight {
                value,
                reason: "must be finite",
            });
        }

        if value < 0.0 {
            return Err(InvalidWeight {
                value,
                reason: "must not be negative",
            });
        }

        Ok(Weight(value))
    }

    /// Returns the raw value.
    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Debug for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Weight({})", self.0)
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Cost of waiting a given dwell at a stop, under the caller's shaping
/// preferences.
///
/// Contract, binding on every implementation:
///
/// - deterministic: equal inputs give equal outputs;
/// - non-negative for every input;
/// - non-decreasing as `dwell_seconds` increases, for a fixed state
///   shape;
/// - zero dwell yields the minimal (possibly zero) weight.
///
/// The traversal core forwards the predecessor state unmodified, so a
/// curve may, for example, price the initial wait of an itinerary
/// differently from waits at transfers.
pub trait WaitCost: Send + Sync {
    /// Weight of waiting `dwell_seconds` in `state`.
    fn weight_for_wait(&self, dwell_seconds: i64, state: &TraversalState) -> f64;
}

/// Error returned when constructing a wait cost with invalid factors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("invalid wait cost factor {value}: {reason}")]
pub struct InvalidWaitCost {
    /// The offending factor.
    pub value: f64,
    reason: &'static str,
}

/// The default wait-cost curve: a per-second reluctance factor, with a
/// separate (usually smaller) factor for the initial wait before the
/// first boarding.
///
/// Factors are validated at construction, so the weights this curve
/// produces always satisfy the [`WaitCost`] contract.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearWaitCost {
    wait_reluctance: f64,
    initial_wait_reluctance: f64,
}

impl LinearWaitCost {
    /// Create a curve from the two reluctance factors.
    ///
    /// Both must be finite and non-negative.
    pub fn new(wait_reluctance: f64, initial_wait_reluctance: f64) -> Result<Self, InvalidWaitCost> {
        for value in [wait_reluctance, initial_wait_reluctance] {
            if !value.is_finite() {
                return Err(InvalidWaitCost {
                    value,
                    reason: "must be finite",
                });
            }
            if value < 0.0 {
                return Err(InvalidWaitCost {
                    value,
                    reason: "must not be negative",
                });
            }
        }

        Ok(Self {
            wait_reluctance,
            initial_wait_reluctance,
        })
    }
}

impl Default for LinearWaitCost {
    fn default() -> Self {
        // Waiting at a transfer hurts more than waiting before setting
        // off, since the traveler could have started later instead.
        Self {
            wait_reluctance: 2.5,
            initial_wait_reluctance: 0.5,
        }
    }
}

impl WaitCost for LinearWaitCost {
    fn weight_for_wait(&self, dwell_seconds: i64, state: &TraversalState) -> f64 {
        let factor = if state.boarding_count() == 0 {
            self.initial_wait_reluctance
        } else {
            self.wait_reluctance
        };

        dwell_seconds.max(0) as f64 * factor
    }
}
