//! Transit itinerary traversal core.
//!
//! A library that answers: "standing at this stop at this time, which
//! departures towards that stop are worth boarding, and what does each
//! one cost?" An outer shortest-path search drives the edges defined
//! here over a time-expanded graph; the schedule/real-time subsystem
//! behind the [`schedule::DepartureProvider`] trait answers the
//! departure queries.

pub mod domain;
pub mod graph;
pub mod schedule;
pub mod typeahead;
