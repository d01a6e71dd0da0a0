//! Documentation entries and the site's static catalog.
//!
//! Entries form a small tree: a page or a named subsection is a [`DocEntry::Leaf`],
//! and a page that groups subsections is a [`DocEntry::Node`]. The tree is reference
//! data; nothing mutates it after construction.

mod builtin;

pub use builtin::catalog;

use std::borrow::Cow;

/// One searchable unit of documentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocEntry {
    /// A page or subsection without nested entries.
    Leaf {
        name: Cow<'static, str>,
        keywords: Cow<'static, str>,
    },
    /// A page whose subsections are listed in order under it.
    Node {
        name: Cow<'static, str>,
        keywords: Cow<'static, str>,
        children: Vec<DocEntry>,
    },
}

impl DocEntry {
    /// Create a leaf entry.
    pub fn leaf(name: impl Into<Cow<'static, str>>, keywords: impl Into<Cow<'static, str>>) -> Self {
        Self::Leaf {
            name: name.into(),
            keywords: keywords.into(),
        }
    }

    /// Create an entry with subsections.
    pub fn node(
        name: impl Into<Cow<'static, str>>,
        keywords: impl Into<Cow<'static, str>>,
        children: Vec<DocEntry>,
    ) -> Self {
        Self::Node {
            name: name.into(),
            keywords: keywords.into(),
            children,
        }
    }

    /// Display title.
    pub fn name(&self) -> &str {
        match self {
            Self::Leaf { name, .. } | Self::Node { name, .. } => name,
        }
    }

    /// Hidden search synonyms, as stored.
    pub fn keywords(&self) -> &str {
        match self {
            Self::Leaf { keywords, .. } | Self::Node { keywords, .. } => keywords,
        }
    }

    /// Nested subsections (empty for leaves).
    pub fn children(&self) -> &[DocEntry] {
        match self {
            Self::Leaf { .. } => &[],
            Self::Node { children, .. } => children,
        }
    }

    /// Whether this entry renders as a collapsible section.
    pub fn is_disclosure(&self) -> bool {
        matches!(self, Self::Node { .. })
    }

    /// Fragment identifier that deep-links to this entry.
    ///
    /// `Player.onEvent()` becomes `player-onevent`.
    pub fn anchor(&self) -> String {
        anchor_for(self.name())
    }

    /// Depth-first, pre-order walk over this entry and its descendants,
    /// yielding each entry with its nesting depth (0 for `self`).
    pub fn walk(&self) -> impl Iterator<Item = (usize, &DocEntry)> {
        let mut stack = vec![(0, self)];
        std::iter::from_fn(move || {
            let (depth, entry) = stack.pop()?;
            stack.extend(entry.children().iter().rev().map(|child| (depth + 1, child)));
            Some((depth, entry))
        })
    }
}

/// Anchor id for an arbitrary title.
pub fn anchor_for(name: &str) -> String {
    slug::slugify(name)
}

/// Walk a whole entry list in display order.
pub fn walk_all(entries: &[DocEntry]) -> impl Iterator<Item = (usize, &DocEntry)> {
    entries.iter().flat_map(DocEntry::walk)
}

/// Find the entry whose anchor id equals `anchor`.
pub fn find_by_anchor<'a>(entries: &'a [DocEntry], anchor: &str) -> Option<&'a DocEntry> {
    walk_all(entries)
        .map(|(_, entry)| entry)
        .find(|entry| entry.anchor() == anchor)
}
