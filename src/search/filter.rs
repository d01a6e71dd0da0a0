//! Applies the match evaluator across an entry tree.

use super::matcher::matches;
use crate::catalog::DocEntry;

/// Visibility of one entry after filtering, mirroring the entry tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Visibility<'a> {
    pub entry: &'a DocEntry,
    /// The entry's own name or keywords matched.
    pub self_match: bool,
    /// Shown: matched itself, or some descendant is shown.
    pub visible: bool,
    pub children: Vec<Visibility<'a>>,
}

impl<'a> Visibility<'a> {
    /// Visible descendants (and self), pre-order, with depth.
    pub fn visible_entries(&self) -> Vec<(usize, &'a DocEntry)> {
        let mut out = Vec::new();
        self.collect_visible(0, &mut out);
        out
    }

    fn collect_visible(&self, depth: usize, out: &mut Vec<(usize, &'a DocEntry)>) {
        if !self.visible {
            return;
        }
        out.push((depth, self.entry));
        for child in &self.children {
            child.collect_visible(depth + 1, out);
        }
    }
}

/// Evaluate one entry and, recursively, its subsections.
///
/// A parent stays visible when any descendant is visible, even if the parent's own
/// text does not match. Children of a matching parent keep their own result.
pub fn evaluate<'a>(entry: &'a DocEntry, query: &str) -> Visibility<'a> {
    let self_match = matches(entry.name(), query, entry.keywords());
    let children: Vec<Visibility<'a>> = entry
        .children()
        .iter()
        .map(|child| evaluate(child, query))
        .collect();
    let visible = self_match || children.iter().any(|child| child.visible);

    Visibility {
        entry,
        self_match,
        visible,
        children,
    }
}

/// Filter an ordered entry list for `query`.
pub fn filter<'a>(entries: &'a [DocEntry], query: &str) -> Vec<Visibility<'a>> {
    let results: Vec<Visibility<'a>> = entries.iter().map(|entry| evaluate(entry, query)).collect();
    tracing::debug!(
        query,
        total = entries.len(),
        visible = results.iter().filter(|v| v.visible).count(),
        "Filtered documentation entries"
    );
    results
}

/// Flattened list of visible entries, in display order, with depth.
pub fn visible_entries<'a>(results: &[Visibility<'a>]) -> Vec<(usize, &'a DocEntry)> {
    results.iter().flat_map(Visibility::visible_entries).collect()
}
