//! The time-expanded traversal core.
//!
//! An outer label-correcting search holds a frontier of
//! [`TraversalState`] values and asks edges to expand them. A
//! [`DepartureEdge`] queries the departure provider for its fixed stop
//! pair and turns every usable candidate into one weighted successor
//! transition; an [`ArrivalEdge`] marks reaching a destination stop at
//! zero cost. Traversal is synchronous, performs at most one provider
//! query per call, and bounds its own work only through
//! [`TraverseOptions::num_itineraries`].
//!
//! All values exchanged here are immutable once constructed, and edges
//! hold only their fixed identity, so edges may be shared across
//! threads and traversed concurrently with different states.

mod edge;
mod options;
mod results;
mod state;
mod vertex;
mod weight;

pub use edge::{ArrivalEdge, DepartureEdge, StopPair, TransitEdge, TraversalError};
pub use options::TraverseOptions;
pub use results::{SuccessorResult, TraverseResults};
pub use state::TraversalState;
pub use vertex::{EdgeNarrative, Vertex};
pub use weight::{InvalidWaitCost, InvalidWeight, LinearWaitCost, WaitCost, Weight};
