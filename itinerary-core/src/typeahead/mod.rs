//! Typeahead suggestions for route and stop search boxes.
//!
//! Builds an immutable prefix index over route short names and stop
//! ids, then publishes it atomically; the [`SuggestionService`] tracks
//! the uninitialized/building/ready lifecycle so queries made before
//! the first build completes simply come back empty.
//!
//! This is a convenience for user interfaces and is independent of the
//! traversal core.

mod index;
mod service;

pub use index::{RouteEntry, StopEntry, SuggestionCatalog, SuggestionIndex};
pub use service::{IndexStatus, SuggestionService};
