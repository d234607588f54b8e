//! Mock departure provider for testing without schedule data.
//!
//! Serves pre-loaded departure boards for fixed stop pairs, either
//! inserted directly or loaded from JSON fixture files, as if they came
//! from a live schedule/real-time subsystem.

use std::collections::HashMap;
use std::path::Path;

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::domain::{StopId, TargetTime};

use super::error::ScheduleError;
use super::instance::DepartureArrival;
use super::provider::DepartureProvider;

/// A fixture file: all candidate pairs for one stop pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MockBoard {
    /// Origin stop of the pair.
    pub origin: StopId,

    /// Destination stop of the pair.
    pub destination: StopId,

    /// Candidate (departure, arrival) pairs, in any order.
    pub pairs: Vec<DepartureArrival>,
}

/// Mock departure provider serving in-memory boards.
///
/// This is useful for development and testing without a real schedule
/// subsystem. Queries honor the provider contract: results are sorted
/// ascending by best departure time, bounded by `max_results`, and
/// include departures from `lookahead` before the search time onward.
#[derive(Debug, Default)]
pub struct MockScheduleProvider {
    /// Pre-loaded candidate pairs, keyed by (origin, destination).
    boards: HashMap<(StopId, StopId), Vec<DepartureArrival>>,
}

impl MockScheduleProvider {
    /// Create an empty provider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add candidate pairs for a stop pair, appending to any already
    /// present.
    pub fn add_pairs(
        &mut self,
        origin: StopId,
        destination: StopId,
        pairs: Vec<DepartureArrival>,
    ) {
        self.boards
            .entry((origin, destination))
            .or_default()
            .extend(pairs);
    }

    /// Create a provider by loading JSON fixture files from a directory.
    ///
    /// Every `.json` file in the directory is parsed as a [`MockBoard`].
    /// Non-JSON files are ignored.
    pub fn from_dir(data_dir: impl AsRef<Path>) -> Result<Self, ScheduleError> {
        let data_dir = data_dir.as_ref();
        let mut provider = Self::new();

        let entries = std::fs::read_dir(data_dir).map_err(|e| ScheduleError::Fixture {
            message: format!("failed to read fixture directory {data_dir:?}: {e}"),
        })?;

        for entry in entries {
            let entry = entry.map_err(|e| ScheduleError::Fixture {
                message: format!("failed to read directory entry: {e}"),
            })?;

            let path = entry.path();
            if !path.is_file() || path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }

            let json = std::fs::read_to_string(&path).map_err(|e| ScheduleError::Fixture {
                message: format!("failed to read {path:?}: {e}"),
            })?;

            let board: MockBoard =
                serde_json::from_str(&json).map_err(|e| ScheduleError::Fixture {
                    message: format!("failed to parse {path:?}: {e}"),
                })?;

            provider.add_pairs(board.origin, board.destination, board.pairs);
        }

        if provider.boards.is_empty() {
            return Err(ScheduleError::Fixture {
                message: format!("no fixture files found in {data_dir:?}"),
            });
        }

        Ok(provider)
    }
}

impl DepartureProvider for MockScheduleProvider {
    fn next_departures_for_stop_pair(
        &self,
        origin: &StopId,
        destination: &StopId,
        target: TargetTime,
        max_results: usize,
        use_realtime: bool,
        lookahead: Duration,
    ) -> Result<Vec<DepartureArrival>, ScheduleError> {
        let key = (origin.clone(), destination.clone());

        let Some(board) = self.boards.get(&key) else {
            return Ok(Vec::new());
        };

        let earliest = target.search_time.minus_seconds(lookahead.num_seconds());

        let mut results: Vec<DepartureArrival> = board
            .iter()
            .filter(|pair| pair.departure.best_departure_time(use_realtime) >= earliest)
            .cloned()
            .collect();

        results.sort_by_key(|pair| pair.departure.best_departure_time(use_realtime));
        results.truncate(max_results);

        Ok(results)
    }
}
