//! Search over documentation entries.
//!
//! The matcher is a pure predicate over an entry's name and keywords; filtering walks
//! the entry tree with it, and suggestions cover queries that show nothing.

pub(crate) mod filter;
pub(crate) mod matcher;
pub(crate) mod suggest;
pub(crate) mod tokenize;

pub use filter::{Visibility, evaluate, filter, visible_entries};
pub use matcher::matches;
pub use suggest::{Suggestion, suggest};
pub use tokenize::{Term, is_separator, split_terms};
