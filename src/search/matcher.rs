//! Match evaluation for a single documentation entry.

use super::tokenize::{Term, split_terms};

/// Decide whether an entry titled `name` with hidden `keywords` should be shown
/// for `query`.
///
/// An empty query matches everything. Otherwise the whole query is first tried as a
/// case-insensitive substring of `name`. Failing that, the query is split into terms
/// (see [`split_terms`]) and the entry matches if any term is a substring of the
/// lowercased name or of the keywords as stored. Quoted phrases are compared without
/// their quotes.
///
/// Matching is OR across terms and fields, and always substring based:
/// `cat` matches `concatenate`.
pub fn matches(name: &str, query: &str, keywords: &str) -> bool {
    if query.is_empty() {
        return true;
    }

    let name = name.to_lowercase();
    if name.contains(&query.to_lowercase()) {
        return true;
    }

    let mut terms = split_terms(query);
    if terms.is_empty() {
        terms.push(Term::Word(query));
    }

    terms.iter().any(|term| {
        let needle = term.needle();
        name.contains(needle.as_str()) || keywords.contains(needle.as_str())
    })
}
