//! Successor transitions and their aggregation.

use super::state::TraversalState;
use super::vertex::EdgeNarrative;
use super::weight::Weight;

/// One successor transition produced by a traversal call.
#[derive(Debug, Clone)]
pub struct SuccessorResult {
    /// Cost of taking this transition. Never negative.
    pub weight: Weight,

    /// The state after the transition.
    pub state: TraversalState,

    /// Display pairing for this transition.
    pub narrative: EdgeNarrative,
}

/// The ordered collection of all successor transitions produced by one
/// traversal call.
///
/// A single stop pair can have several valid next departures, each a
/// distinct transition the outer search must consider independently.
/// Appending preserves every previously produced element; nothing is
/// dropped or duplicated.
#[derive(Debug, Clone, Default)]
pub struct TraverseResults {
    results: Vec<SuccessorResult>,
}

impl TraverseResults {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a collection holding a single result.
    pub fn single(result: SuccessorResult) -> Self {
        Self {
            results: vec![result],
        }
    }

    /// Append a result, keeping all previous ones.
    pub fn push(&mut self, result: SuccessorResult) {
        self.results.push(result);
    }

    /// Number of successor transitions.
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Whether no successors were produced (a dead end, not an error).
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Iterate over the successors in append order.
    pub fn iter(&self) -> std::slice::Iter<'_, SuccessorResult> {
        self.results.iter()
    }

    /// The successors as a slice, in append order.
    pub fn as_slice(&self) -> &[SuccessorResult] {
        &self.results
    }
}

impl IntoIterator for TraverseResults {
    type Item = SuccessorResult;
    type IntoIter = std::vec::IntoIter<SuccessorResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.into_iter()
    }
}

impl<'a> IntoIterator for &'a TraverseResults {
    type Item = &'a SuccessorResult;
    type IntoIter = std::slice::Iter<'a, SuccessorResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.iter()
    }
}
