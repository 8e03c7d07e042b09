//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the two fetchers behind their trait seams; neither keeps any cached
//! data between requests.

use std::sync::Arc;

use crate::services::products::ProductSource;
use crate::services::storage::ObjectListing;

/// Clone is required by Axum; both fetchers are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub products: Arc<dyn ProductSource>,
    pub objects: Arc<dyn ObjectListing>,
}

impl AppState {
    #[must_use]
    pub fn new(products: Arc<dyn ProductSource>, objects: Arc<dyn ObjectListing>) -> Self {
        Self { products, objects }
    }
}
