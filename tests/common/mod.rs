//! Shared test fixtures for integration tests.
//!
//! # Available Fixtures
//!
//! - `site`: A [`SiteState`] over the builtin catalog with default configuration
//! - `outline`: An [`OutlinePage`] laid out from the builtin catalog

use datapack_docs::navigation::OutlinePage;
use datapack_docs::{Config, SiteState, catalog};
use rstest::fixture;
use std::sync::Arc;

/// Site state over the builtin catalog with default configuration.
#[fixture]
pub fn site() -> SiteState {
    datapack_docs::tracing::init(tracing::Level::DEBUG);
    SiteState::new(Config::default())
}

/// Outline page of the builtin catalog, scrolled to the top.
#[fixture]
#[allow(dead_code)] // Used by a subset of integration test crates
pub fn outline() -> Arc<OutlinePage> {
    Arc::new(OutlinePage::new(catalog::catalog()))
}
