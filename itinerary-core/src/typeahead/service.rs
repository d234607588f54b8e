//! Lifecycle and publication of the suggestion index.

use std::sync::{Arc, PoisonError, RwLock};

use tracing::info;

use super::index::{SuggestionCatalog, SuggestionIndex};

/// Where the service is in its index lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexStatus {
    /// No index has ever been built.
    Uninitialized,

    /// A build is in progress; queries are answered from the previously
    /// published index, if any.
    Building,

    /// A completed index is published.
    Ready,
}

enum IndexState {
    Uninitialized,
    Building {
        previous: Option<Arc<SuggestionIndex>>,
    },
    Ready(Arc<SuggestionIndex>),
}

impl Default for IndexState {
    fn default() -> Self {
        IndexState::Uninitialized
    }
}

/// Process-wide suggestion service.
///
/// The index lifecycle is explicit: `Uninitialized` until the first
/// build starts, `Building` while one runs, `Ready` once a completed
/// index has been atomically published. Queries never block on a build
/// and never observe a half-built index: before the first publication
/// they return nothing, and during a rebuild they are answered from the
/// previously published index.
///
/// # Examples
///
/// ```
/// use itinerary_core::typeahead::{IndexStatus, SuggestionCatalog, SuggestionService};
///
/// let service = SuggestionService::new();
/// assert_eq!(service.status(), IndexStatus::Uninitialized);
/// assert!(service.suggestions("4").is_empty());
///
/// service.rebuild(&SuggestionCatalog::default());
/// assert_eq!(service.status(), IndexStatus::Ready);
/// ```
#[derive(Default)]
pub struct SuggestionService {
    state: RwLock<IndexState>,
}

impl SuggestionService {
    /// Create a service with no index.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current lifecycle status.
    pub fn status(&self) -> IndexStatus {
        let guard = self.state.read().unwrap_or_else(PoisonError::into_inner);
        match *guard {
            IndexState::Uninitialized => IndexStatus::Uninitialized,
            IndexState::Building { .. } => IndexStatus::Building,
            IndexState::Ready(_) => IndexStatus::Ready,
        }
    }

    /// Suggestions for a typed prefix, from whichever index is
    /// currently published. Empty when none is.
    pub fn suggestions(&self, input: &str) -> Vec<String> {
        let index = {
            let guard = self.state.read().unwrap_or_else(PoisonError::into_inner);
            match &*guard {
                IndexState::Uninitialized => None,
                IndexState::Building { previous } => previous.clone(),
                IndexState::Ready(index) => Some(index.clone()),
            }
        };

        match index {
            Some(index) => index.suggestions(input),
            None => Vec::new(),
        }
    }

    /// Build a fresh index from the catalog and publish it.
    ///
    /// The build runs outside the lock; only the final swap takes the
    /// write lock, so concurrent queries keep being served throughout.
    /// Safe to call again later to refresh the published index.
    pub fn rebuild(&self, catalog: &SuggestionCatalog) {
        {
            let mut guard = self.state.write().unwrap_or_else(PoisonError::into_inner);
            let previous = match std::mem::take(&mut *guard) {
                IndexState::Ready(index) => Some(index),
                IndexState::Building { previous } => previous,
                IndexState::Uninitialized => None,
            };
            *guard = IndexState::Building { previous };
        }

        info!(
            routes = catalog.routes.len(),
            stops = catalog.stops.len(),
            "building suggestion index"
        );

        let index = SuggestionIndex::build(catalog);
        let entries = index.len();

        {
            let mut guard = self.state.write().unwrap_or_else(PoisonError::into_inner);
            *guard = IndexState::Ready(Arc::new(index));
        }

        info!(entries, "suggestion index ready");
    }
}
