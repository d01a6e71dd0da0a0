//! "Did you mean" suggestions for queries that match nothing.

use crate::catalog::{DocEntry, walk_all};
use rapidfuzz::distance::jaro_winkler;

/// Minimum similarity for a name to be offered as a suggestion.
const MIN_SCORE: f64 = 0.7;

/// A suggested entry with its similarity to the query (0.0 to 1.0).
#[derive(Debug, Clone)]
pub struct Suggestion<'a> {
    pub entry: &'a DocEntry,
    pub score: f64,
}

/// Rank entry names by Jaro-Winkler similarity to `query`, best first.
pub fn suggest<'a>(entries: &'a [DocEntry], query: &str, limit: usize) -> Vec<Suggestion<'a>> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }

    let mut suggestions: Vec<Suggestion<'a>> = walk_all(entries)
        .map(|(_, entry)| Suggestion {
            entry,
            score: jaro_winkler::similarity(query.chars(), entry.name().to_lowercase().chars()),
        })
        .filter(|s| s.score > MIN_SCORE)
        .collect();

    suggestions.sort_by(|a, b| b.score.total_cmp(&a.score));
    suggestions.truncate(limit);
    suggestions
}
