//! In-memory page model laid out from an entry list.

use super::Viewport;
use crate::catalog::{DocEntry, walk_all};
use ahash::AHashMap;
use std::sync::Mutex;

/// Vertical space given to every rendered entry.
pub const ROW_HEIGHT_PX: f64 = 48.0;

#[derive(Debug)]
struct Section {
    top: f64,
    disclosure: bool,
}

/// A page that renders each entry as one section anchor, top to bottom.
///
/// Entries with subsections are disclosures, collapsed until expanded. Scrolls are
/// applied immediately.
#[derive(Debug)]
pub struct OutlinePage {
    sections: AHashMap<String, Section>,
    scroll: Mutex<f64>,
    expanded: Mutex<Vec<String>>,
}

impl OutlinePage {
    pub fn new(entries: &[DocEntry]) -> Self {
        let mut sections = AHashMap::new();
        for (row, (_, entry)) in walk_all(entries).enumerate() {
            sections.entry(entry.anchor()).or_insert(Section {
                top: row as f64 * ROW_HEIGHT_PX,
                disclosure: entry.is_disclosure(),
            });
        }

        Self {
            sections,
            scroll: Mutex::new(0.0),
            expanded: Mutex::new(Vec::new()),
        }
    }

    /// Whether the disclosure `id` has been expanded.
    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded
            .lock()
            .map(|expanded| expanded.iter().any(|e| e == id))
            .unwrap_or(false)
    }
}

impl Viewport for OutlinePage {
    fn section_top(&self, id: &str) -> Option<f64> {
        self.sections.get(id).map(|section| section.top)
    }

    fn scroll_y(&self) -> f64 {
        self.scroll.lock().map(|scroll| *scroll).unwrap_or(0.0)
    }

    fn smooth_scroll_to(&self, top: f64) {
        if let Ok(mut scroll) = self.scroll.lock() {
            *scroll = top;
        }
    }

    fn expand_disclosure(&self, id: &str) -> bool {
        let is_disclosure = self.sections.get(id).is_some_and(|s| s.disclosure);
        if !is_disclosure {
            return false;
        }
        if let Ok(mut expanded) = self.expanded.lock()
            && !expanded.iter().any(|e| e == id)
        {
            expanded.push(id.to_string());
        }
        true
    }
}
