//! Application state shared across handlers.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;

use crate::config::StorefrontConfig;
use crate::routes::home::ProductCardView;
use crate::routes::products::ProductDetailView;
use crate::storefront::StorefrontApi;

/// Duration for which fetched page data is considered fresh.
const REVALIDATE_WINDOW: Duration = Duration::from_secs(3600);

/// Cached page data, keyed by page identity.
///
/// Only successful view models are cached; error, not-found, and
/// unavailable outcomes are re-evaluated on every request.
#[derive(Clone)]
pub enum CachedPage {
    /// The home page's featured product cards.
    Featured(Vec<ProductCardView>),
    /// A ready product detail view.
    Product(Box<ProductDetailView>),
}

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`; there is no shared mutable state beyond
/// the advisory revalidation cache.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    api: Arc<dyn StorefrontApi>,
    pages: Cache<String, CachedPage>,
}

impl AppState {
    /// Create a new application state around a Storefront API handle.
    #[must_use]
    pub fn new(config: StorefrontConfig, api: Arc<dyn StorefrontApi>) -> Self {
        let pages = Cache::builder()
            .max_capacity(64)
            .time_to_live(REVALIDATE_WINDOW)
            .build();

        Self {
            inner: Arc::new(AppStateInner { config, api, pages }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a handle to the Storefront API.
    #[must_use]
    pub fn api(&self) -> &dyn StorefrontApi {
        self.inner.api.as_ref()
    }

    /// Get the revalidation cache for page data.
    #[must_use]
    pub fn pages(&self) -> &Cache<String, CachedPage> {
        &self.inner.pages
    }
}
