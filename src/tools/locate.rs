//! Deep-link resolution handler.

use crate::catalog::{DocEntry, find_by_anchor};
use crate::config::NavigationConfig;
use crate::navigation::{HashSync, NavigationReport, OutlinePage};
use rmcp::schemars;
use serde::Deserialize;
use std::fmt::Write as _;
use std::sync::Arc;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct LocateRequest {
    /// Page location carrying a fragment, e.g. 'https://site/docs#player-onevent' or '#math-random'
    pub location: String,
}

/// Run a hash-sync pass for `location` against a fresh outline page of `entries`.
///
/// Returns `None` when the location has no fragment.
pub async fn locate(
    entries: &[DocEntry],
    config: &NavigationConfig,
    location: &str,
) -> Option<NavigationReport> {
    let page = Arc::new(OutlinePage::new(entries));
    let sync = HashSync::new(page, config.clone());
    let pending = sync.on_ready(location)?;
    Some(pending.finish().await)
}

/// Resolve a location and describe what navigating to it does.
pub async fn handle_locate(
    entries: &[DocEntry],
    config: &NavigationConfig,
    request: &LocateRequest,
) -> String {
    match locate(entries, config, &request.location).await {
        Some(report) => format_report(entries, &report),
        None => format!(
            "'{}' has no fragment; the page stays at the top.\n",
            request.location
        ),
    }
}

/// Human-readable summary of a navigation pass.
pub fn format_report(entries: &[DocEntry], report: &NavigationReport) -> String {
    let mut output = format!("Fragment: #{}\n", report.fragment);

    match (report.target, find_by_anchor(entries, &report.fragment)) {
        (Some(top), Some(entry)) => {
            let _ = writeln!(output, "Section: {} (scrolled to {}px)", entry.name(), top);
        }
        (Some(top), None) => {
            let _ = writeln!(output, "Section: scrolled to {}px", top);
        }
        (None, _) => output.push_str("Section: not found, no scroll\n"),
    }

    let _ = writeln!(
        output,
        "Navigation collapsed: {}",
        if report.collapsed { "yes" } else { "no" }
    );
    let _ = writeln!(
        output,
        "Disclosure expanded: {}",
        if report.expanded { "yes" } else { "no" }
    );
    output
}
