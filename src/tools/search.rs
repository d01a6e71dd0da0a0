//! Documentation search handler.

use crate::catalog::DocEntry;
use crate::search::{filter, suggest, visible_entries};
use rmcp::schemars;
use serde::Deserialize;
use std::fmt::Write as _;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SearchRequest {
    /// Search text. Whitespace separates terms; "double quotes" group a phrase.
    /// An empty query lists every entry.
    pub query: String,
    /// Maximum number of entries to list (default: 50)
    #[serde(default = "default_limit")]
    pub limit: Option<usize>,
}

fn default_limit() -> Option<usize> {
    Some(50)
}

/// Filter the documentation entries and format the visible ones.
pub fn handle_search(entries: &[DocEntry], request: &SearchRequest) -> String {
    let limit = request.limit.unwrap_or(50);
    let results = filter(entries, &request.query);
    let visible = visible_entries(&results);

    if visible.is_empty() {
        return format_no_results(entries, &request.query);
    }

    let mut output = if request.query.is_empty() {
        "Documentation entries:\n\n".to_string()
    } else {
        format!("Entries matching '{}':\n\n", request.query)
    };

    for (depth, entry) in visible.iter().take(limit) {
        let _ = writeln!(
            output,
            "{}• {} (#{})",
            "  ".repeat(*depth),
            entry.name(),
            entry.anchor()
        );
    }

    if visible.len() > limit {
        let _ = writeln!(output, "\n… and {} more", visible.len() - limit);
    }

    output
}

fn format_no_results(entries: &[DocEntry], query: &str) -> String {
    let mut msg = format!("No entries match '{}'.\n\n", query);

    let suggestions = suggest(entries, query, 5);
    if !suggestions.is_empty() {
        msg.push_str("Did you mean:\n");
        for suggestion in &suggestions {
            let _ = writeln!(
                msg,
                "• {} (#{})",
                suggestion.entry.name(),
                suggestion.entry.anchor()
            );
        }
        msg.push('\n');
    }

    msg.push_str("Search tips:\n");
    msg.push_str("• Any single term may match; try fewer or shorter words\n");
    msg.push_str("• Wrap multi-word phrases in \"double quotes\"\n");
    msg.push_str("• Search built-ins by name, e.g. 'Player' or 'Timer.add'\n");
    msg
}
