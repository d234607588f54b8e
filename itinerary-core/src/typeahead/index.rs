//! The immutable suggestion index.

use std::collections::HashMap;

use crate::domain::StopId;

/// Longest whole-string prefix indexed for multi-word entries.
const MAX_TYPEAHEAD_LENGTH: usize = 10;

/// Most suggestions returned per lookup.
const MAX_SUGGESTIONS: usize = 10;

/// A route entry feeding the index.
#[derive(Debug, Clone)]
pub struct RouteEntry {
    /// Rider-facing short name (e.g. "40", "D Line").
    pub short_name: String,

    /// Long descriptive name used as the suggestion hint, when present.
    pub long_name: Option<String>,
}

/// A stop entry feeding the index.
#[derive(Debug, Clone)]
pub struct StopEntry {
    /// The stop identifier riders type.
    pub id: StopId,

    /// Stop name used as the suggestion hint, when present.
    pub name: Option<String>,
}

/// Everything the index is built from: route short names and stop ids,
/// each with a display hint.
#[derive(Debug, Clone, Default)]
pub struct SuggestionCatalog {
    /// Routes to index.
    pub routes: Vec<RouteEntry>,

    /// Stops to index.
    pub stops: Vec<StopEntry>,
}

/// An immutable prefix-to-suggestions mapping.
///
/// Keys are lowercased prefixes of the indexed text; values are
/// suggestion strings of the form `"<text> [<hint>]"`, kept sorted.
/// Hints fall back to the identifier itself when no human-readable name
/// exists, so an entry is never hint-less.
///
/// The index is built once and never mutated; publication of a freshly
/// built index is the [`SuggestionService`]'s job.
///
/// [`SuggestionService`]: super::SuggestionService
#[derive(Debug, Default)]
pub struct SuggestionIndex {
    suggestions: HashMap<String, Vec<String>>,
}

impl SuggestionIndex {
    /// Build an index from a catalog.
    pub fn build(catalog: &SuggestionCatalog) -> Self {
        let mut suggestions: HashMap<String, Vec<String>> = HashMap::new();

        for route in &catalog.routes {
            if route.short_name.is_empty() {
                continue;
            }
            let hint = route.long_name.as_deref().unwrap_or(&route.short_name);
            add_inputs_for(&mut suggestions, &route.short_name, true, hint);
        }

        for stop in &catalog.stops {
            let text = stop.id.as_str();
            let hint = stop.name.as_deref().unwrap_or(text);
            add_inputs_for(&mut suggestions, text, false, hint);
        }

        for list in suggestions.values_mut() {
            list.sort();
        }

        Self { suggestions }
    }

    /// Look up suggestions for a typed prefix.
    ///
    /// Lookup is by lowercased key; at most ten suggestions are
    /// returned, in sorted order. An unknown prefix yields an empty
    /// list.
    pub fn suggestions(&self, input: &str) -> Vec<String> {
        let mut matched = match self.suggestions.get(input) {
            Some(list) => list.clone(),
            None => return Vec::new(),
        };
        matched.truncate(MAX_SUGGESTIONS);
        matched
    }

    /// Number of distinct indexed prefixes.
    pub fn len(&self) -> usize {
        self.suggestions.len()
    }

    /// Whether the index holds nothing.
    pub fn is_empty(&self) -> bool {
        self.suggestions.is_empty()
    }
}

/// Index every typeahead key for one entry.
///
/// Each whitespace-separated term (or the whole text, when splitting is
/// off) contributes all of its prefixes. Multi-term entries additionally
/// contribute whole-string prefixes past the first term, capped at
/// [`MAX_TYPEAHEAD_LENGTH`] characters, plus the full string when it is
/// longer than the cap, so multi-word searches still complete.
fn add_inputs_for(
    suggestions: &mut HashMap<String, Vec<String>>,
    text: &str,
    split_terms: bool,
    hint: &str,
) {
    let suggestion = format!("{text} [{hint}]");

    let terms: Vec<&str> = if split_terms {
        text.split_whitespace().collect()
    } else {
        vec![text]
    };

    for term in &terms {
        for prefix in char_prefixes(term, term.chars().count()) {
            suggestions
                .entry(prefix.to_lowercase())
                .or_default()
                .push(suggestion.clone());
        }
    }

    if terms.len() > 1 {
        let first_len = terms[0].chars().count();
        let text_len = text.chars().count();

        for prefix in char_prefixes(text, text_len.min(MAX_TYPEAHEAD_LENGTH)) {
            if prefix.chars().count() <= first_len {
                continue;
            }
            suggestions
                .entry(prefix.to_lowercase())
                .or_default()
                .push(suggestion.clone());
        }

        if text_len > MAX_TYPEAHEAD_LENGTH {
            suggestions
                .entry(text.to_lowercase())
                .or_default()
                .push(suggestion.clone());
        }
    }
}

/// All character-boundary prefixes of `s` up to `max_chars` characters.
fn char_prefixes(s: &str, max_chars: usize) -> impl Iterator<Item = &str> {
    s.char_indices()
        .map(|(i, c)| &s[..i + c.len_utf8()])
        .take(max_chars)
}
