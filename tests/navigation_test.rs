mod common;

use assert2::{check, let_assert};
use common::{outline, site};
use datapack_docs::config::NavigationConfig;
use datapack_docs::navigation::{OutlinePage, ROW_HEIGHT_PX};
use datapack_docs::tools::{LocateRequest, handle_locate};
use datapack_docs::{HashSync, NavigationEvent, SiteState, Viewport};
use rstest::rstest;
use std::sync::Arc;

/// Deep link to a built-in scrolls to its row and closes the navigation overlay.
#[rstest]
#[tokio::test(start_paused = true)]
async fn deep_link_scrolls_and_collapses(outline: Arc<OutlinePage>) {
    let sync = HashSync::new(Arc::clone(&outline), NavigationConfig::default());
    let mut events = sync.subscribe();

    let_assert!(Some(pending) = sync.on_ready("https://docs.test/#player-onevent"));
    let report = pending.finish().await;

    let_assert!(Some(top) = report.target);
    check!(top > 0.0);
    check!(top % ROW_HEIGHT_PX == 0.0);
    check!(outline.scroll_y() == top);
    check!(report.collapsed);
    check!(events.recv().await == Ok(NavigationEvent::Collapse));
}

/// Deep link to a page with subsections opens it.
#[rstest]
#[tokio::test(start_paused = true)]
async fn deep_link_expands_disclosure(outline: Arc<OutlinePage>) {
    let sync = HashSync::new(Arc::clone(&outline), NavigationConfig::default());

    let_assert!(Some(pending) = sync.on_ready("#flow-controls"));
    check!(pending.finish().await.expanded);
    check!(outline.is_expanded("flow-controls"));
    check!(!outline.is_expanded("header"));
}

/// A second ready hook in the same page view is ignored.
#[rstest]
#[tokio::test(start_paused = true)]
async fn hash_sync_runs_once(outline: Arc<OutlinePage>) {
    let sync = HashSync::new(Arc::clone(&outline), NavigationConfig::default());

    let_assert!(Some(pending) = sync.on_ready("#classes"));
    let first = pending.finish().await;
    check!(sync.on_ready("#header").is_none());
    check!(outline.scroll_y() == first.target.unwrap_or_default());
    check!(!outline.is_expanded("header"));
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn locate_tool_reports_section(site: SiteState) {
    let request = LocateRequest {
        location: "/docs#math-random".to_string(),
    };
    let output = handle_locate(site.entries(), &site.config().navigation, &request).await;
    check!(output.starts_with("Fragment: #math-random\nSection: Math.random() (scrolled to "));
    check!(output.contains("Navigation collapsed: yes"));
    check!(output.contains("Disclosure expanded: no"));
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn locate_tool_ignores_unknown_anchor(site: SiteState) {
    let request = LocateRequest {
        location: "#not-a-section".to_string(),
    };
    let output = handle_locate(site.entries(), &site.config().navigation, &request).await;
    check!(output.contains("Section: not found, no scroll"));
    check!(output.contains("Disclosure expanded: no"));
}
