//! Unified service container for plotmarket
//!
//! Provides shared access to all core services.

use crate::core::config::Config;
use crate::core::listings::ListingService;
use crate::core::search::SearchService;
use crate::core::storage::{ImageStore, JsonStore, ListingStore};
use std::sync::Arc;

/// Unified services container
///
/// All adapters use this same struct for service access.
#[derive(Clone)]
pub struct Services {
    /// Search coordinator
    pub search: Arc<SearchService>,

    /// Posting, detail and status operations
    pub listings: Arc<ListingService>,

    /// Application configuration
    pub config: Arc<Config>,
}

impl Services {
    /// Create services backed by the JSON snapshot in the data dir
    pub fn new(config: Config) -> Self {
        let store = Arc::new(JsonStore::new(&config.storage.data_dir));
        Self::with_stores(config, store.clone(), store)
    }

    /// Create services over explicit stores
    pub fn with_stores(
        config: Config,
        listings: Arc<dyn ListingStore>,
        images: Arc<dyn ImageStore>,
    ) -> Self {
        let search = Arc::new(SearchService::new(
            Arc::clone(&listings),
            Arc::clone(&images),
            &config.search,
        ));
        let listing_service = Arc::new(ListingService::new(listings, images));

        Self {
            search,
            listings: listing_service,
            config: Arc::new(config),
        }
    }
}
