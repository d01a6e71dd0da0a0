//! Deep-link navigation: synchronise the location fragment with in-page anchors.
//!
//! When a page becomes ready, [`HashSync::on_ready`] reads the fragment of the current
//! location, scrolls the matching section anchor to the top of the viewport and, once the
//! estimated scroll time has passed, announces [`NavigationEvent::Collapse`] if the scroll
//! settled on target. Independently, after a short delay, a disclosure with the same id is
//! forced open. Every lookup is best effort: a missing target is not an error.

mod fragment;
mod page;

pub use fragment::fragment_of;
pub use page::{OutlinePage, ROW_HEIGHT_PX};

use crate::config::NavigationConfig;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::broadcast;
use tokio::task::JoinHandle;

/// Capacity of the navigation event channel.
const EVENT_CAPACITY: usize = 16;

/// The page surface that hash-sync drives.
pub trait Viewport: Send + Sync + 'static {
    /// Document-relative top of the section anchor tagged `id`.
    fn section_top(&self, id: &str) -> Option<f64>;
    /// Current vertical scroll offset.
    fn scroll_y(&self) -> f64;
    /// Begin a smooth scroll so that `top` aligns with the viewport top.
    fn smooth_scroll_to(&self, top: f64);
    /// Force the disclosure tagged `id` open. Returns false if there is none.
    fn expand_disclosure(&self, id: &str) -> bool;
}

/// Broadcast to other listeners on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationEvent {
    /// A deep-link scroll settled; overlays such as the navigation menu should close.
    Collapse,
}

/// Deferred steps scheduled by a hash-sync pass.
///
/// Dropping this leaves the timers running.
#[derive(Debug)]
pub struct PendingNavigation {
    /// The fragment being navigated to.
    pub fragment: String,
    /// Scroll target, when a section anchor matched.
    pub target: Option<f64>,
    /// Resolves to whether the collapse event was sent.
    pub settle: Option<JoinHandle<bool>>,
    /// Resolves to whether a disclosure was expanded.
    pub expand: JoinHandle<bool>,
}

/// What a finished hash-sync pass did.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationReport {
    pub fragment: String,
    pub target: Option<f64>,
    pub collapsed: bool,
    pub expanded: bool,
}

impl PendingNavigation {
    /// Wait for both deferred steps.
    pub async fn finish(self) -> NavigationReport {
        let collapsed = match self.settle {
            Some(handle) => handle.await.unwrap_or(false),
            None => false,
        };
        let expanded = self.expand.await.unwrap_or(false);

        NavigationReport {
            fragment: self.fragment,
            target: self.target,
            collapsed,
            expanded,
        }
    }
}

/// One-shot fragment navigation for a page view.
pub struct HashSync<V: Viewport> {
    viewport: Arc<V>,
    config: NavigationConfig,
    fired: AtomicBool,
    events: broadcast::Sender<NavigationEvent>,
}

impl<V: Viewport> std::fmt::Debug for HashSync<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HashSync")
            .field("config", &self.config)
            .field("fired", &self.fired.load(Ordering::Relaxed))
            .finish()
    }
}

impl<V: Viewport> HashSync<V> {
    pub fn new(viewport: Arc<V>, config: NavigationConfig) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            viewport,
            config,
            fired: AtomicBool::new(false),
            events,
        }
    }

    /// Listen for navigation events.
    pub fn subscribe(&self) -> broadcast::Receiver<NavigationEvent> {
        self.events.subscribe()
    }

    /// Run hash-sync for the page at `location`.
    ///
    /// Only the first call in a page view does anything; later calls return `None`.
    /// Also returns `None` when the location has no fragment. Must be called within a
    /// tokio runtime.
    pub fn on_ready(&self, location: &str) -> Option<PendingNavigation> {
        if self.fired.swap(true, Ordering::AcqRel) {
            tracing::debug!("Hash-sync already ran for this page view");
            return None;
        }

        let fragment = fragment_of(location)?;
        tracing::info!(fragment = %fragment, "Navigating to fragment");

        let target = self.viewport.section_top(&fragment);
        let settle = target.map(|top| self.scroll_to_section(top));
        if target.is_none() {
            tracing::debug!(fragment = %fragment, "No section anchor for fragment");
        }

        let expand = {
            let viewport = Arc::clone(&self.viewport);
            let delay = self.config.expand_delay();
            let id = fragment.clone();
            tokio::spawn(async move {
                tokio::time::sleep(delay).await;
                let expanded = viewport.expand_disclosure(&id);
                tracing::debug!(fragment = %id, expanded, "Disclosure expand step");
                expanded
            })
        };

        Some(PendingNavigation {
            fragment,
            target,
            settle,
            expand,
        })
    }

    fn scroll_to_section(&self, top: f64) -> JoinHandle<bool> {
        let distance = top - self.viewport.scroll_y();
        let duration = self.config.scroll_duration(distance);
        self.viewport.smooth_scroll_to(top);

        let viewport = Arc::clone(&self.viewport);
        let events = self.events.clone();
        let tolerance = self.config.settle_tolerance_px;
        tokio::spawn(async move {
            tokio::time::sleep(duration).await;
            let offset = (viewport.scroll_y() - top).abs();
            if offset > tolerance {
                tracing::debug!(offset, "Scroll did not settle on target");
                return false;
            }
            // No receivers is fine; the event is advisory.
            let _ = events.send(NavigationEvent::Collapse);
            true
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::{check, let_assert};
    use std::sync::Mutex;
    use std::time::Duration;

    /// Viewport stub with configurable anchors and scroll behaviour.
    #[derive(Default)]
    struct StubViewport {
        anchors: Vec<(&'static str, f64)>,
        disclosures: Vec<&'static str>,
        /// When set, scrolling stops short of the target by this many pixels.
        undershoot: f64,
        scroll: Mutex<f64>,
        expanded: Mutex<Vec<String>>,
    }

    impl Viewport for StubViewport {
        fn section_top(&self, id: &str) -> Option<f64> {
            self.anchors.iter().find(|(a, _)| *a == id).map(|(_, top)| *top)
        }

        fn scroll_y(&self) -> f64 {
            *self.scroll.lock().unwrap()
        }

        fn smooth_scroll_to(&self, top: f64) {
            *self.scroll.lock().unwrap() = top - self.undershoot;
        }

        fn expand_disclosure(&self, id: &str) -> bool {
            if self.disclosures.contains(&id) {
                self.expanded.lock().unwrap().push(id.to_string());
                true
            } else {
                false
            }
        }
    }

    fn stub() -> StubViewport {
        StubViewport {
            anchors: vec![("variables", 400.0), ("header", 1200.0)],
            disclosures: vec!["header"],
            ..Default::default()
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_scrolls_and_collapses() {
        let viewport = Arc::new(stub());
        let sync = HashSync::new(Arc::clone(&viewport), NavigationConfig::default());
        let mut events = sync.subscribe();

        let_assert!(Some(pending) = sync.on_ready("https://site.test/docs#variables"));
        let report = pending.finish().await;

        check!(report.target == Some(400.0));
        check!(report.collapsed);
        check!(!report.expanded);
        check!(viewport.scroll_y() == 400.0);
        check!(events.try_recv() == Ok(NavigationEvent::Collapse));
    }

    #[tokio::test(start_paused = true)]
    async fn test_settle_check_waits_for_estimated_duration() {
        let viewport = Arc::new(stub());
        let sync = HashSync::new(Arc::clone(&viewport), NavigationConfig::default());
        let mut events = sync.subscribe();

        let_assert!(Some(pending) = sync.on_ready("#variables"));
        // 400px at 0.5ms/px.
        tokio::time::sleep(Duration::from_millis(150)).await;
        check!(events.try_recv().is_err());

        tokio::time::sleep(Duration::from_millis(100)).await;
        check!(events.try_recv() == Ok(NavigationEvent::Collapse));
        drop(pending);
    }

    #[tokio::test(start_paused = true)]
    async fn test_unsettled_scroll_does_not_collapse() {
        let viewport = Arc::new(StubViewport {
            undershoot: 5.0,
            ..stub()
        });
        let sync = HashSync::new(Arc::clone(&viewport), NavigationConfig::default());
        let mut events = sync.subscribe();

        let_assert!(Some(pending) = sync.on_ready("#variables"));
        let report = pending.finish().await;

        check!(!report.collapsed);
        check!(events.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_within_tolerance_counts_as_settled() {
        let viewport = Arc::new(StubViewport {
            undershoot: 0.5,
            ..stub()
        });
        let sync = HashSync::new(viewport, NavigationConfig::default());

        let_assert!(Some(pending) = sync.on_ready("#variables"));
        check!(pending.finish().await.collapsed);
    }

    #[tokio::test(start_paused = true)]
    async fn test_expands_matching_disclosure() {
        let viewport = Arc::new(stub());
        let sync = HashSync::new(Arc::clone(&viewport), NavigationConfig::default());

        let_assert!(Some(pending) = sync.on_ready("#header"));
        let report = pending.finish().await;

        check!(report.collapsed);
        check!(report.expanded);
        check!(*viewport.expanded.lock().unwrap() == vec!["header".to_string()]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_expand_waits_for_delay() {
        let viewport = Arc::new(stub());
        let sync = HashSync::new(Arc::clone(&viewport), NavigationConfig::default());

        let_assert!(Some(pending) = sync.on_ready("#header"));
        tokio::time::sleep(Duration::from_millis(50)).await;
        check!(viewport.expanded.lock().unwrap().is_empty());

        tokio::time::sleep(Duration::from_millis(60)).await;
        check!(*viewport.expanded.lock().unwrap() == vec!["header".to_string()]);
        check!(pending.finish().await.expanded);
    }

    #[tokio::test(start_paused = true)]
    async fn test_expand_honours_configured_delay() {
        let viewport = Arc::new(stub());
        let config = NavigationConfig {
            expand_delay_ms: 300,
            ..Default::default()
        };
        let sync = HashSync::new(Arc::clone(&viewport), config);

        let_assert!(Some(pending) = sync.on_ready("#header"));
        tokio::time::sleep(Duration::from_millis(250)).await;
        check!(viewport.expanded.lock().unwrap().is_empty());

        tokio::time::sleep(Duration::from_millis(60)).await;
        check!(*viewport.expanded.lock().unwrap() == vec!["header".to_string()]);
        drop(pending);
    }

    #[tokio::test(start_paused = true)]
    async fn test_expand_runs_without_section_anchor() {
        let viewport = Arc::new(StubViewport {
            anchors: vec![],
            ..stub()
        });
        let sync = HashSync::new(Arc::clone(&viewport), NavigationConfig::default());

        let_assert!(Some(pending) = sync.on_ready("#header"));
        check!(pending.target.is_none());
        check!(pending.settle.is_none());
        let report = pending.finish().await;
        check!(!report.collapsed);
        check!(report.expanded);
        check!(viewport.scroll_y() == 0.0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_unknown_fragment_is_silent() {
        let viewport = Arc::new(stub());
        let sync = HashSync::new(Arc::clone(&viewport), NavigationConfig::default());

        let_assert!(Some(pending) = sync.on_ready("#does-not-exist"));
        let report = pending.finish().await;
        check!(report.target.is_none());
        check!(!report.collapsed);
        check!(!report.expanded);
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_fragment_is_noop() {
        let viewport = Arc::new(stub());
        let sync = HashSync::new(Arc::clone(&viewport), NavigationConfig::default());

        check!(sync.on_ready("https://site.test/docs").is_none());
        check!(viewport.scroll_y() == 0.0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_fires_once_per_page_view() {
        let viewport = Arc::new(stub());
        let sync = HashSync::new(Arc::clone(&viewport), NavigationConfig::default());

        let_assert!(Some(pending) = sync.on_ready("#variables"));
        pending.finish().await;
        check!(sync.on_ready("#header").is_none());
        check!(viewport.scroll_y() == 400.0);
    }
}
