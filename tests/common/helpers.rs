// Test helper functions

use async_trait::async_trait;
use plotmarket::core::config::{Config, ScoringMode};
use plotmarket::core::error::{MarketError, Result};
use plotmarket::core::services::Services;
use plotmarket::core::storage::{
    ImageStore, ListingDraft, ListingStore, MemoryStore, StoredListing,
};
use plotmarket::core::types::{Image, Listing, ListingId, ListingStatus, SearchResponse};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

/// Services over an in-memory store with the given scoring mode
#[allow(dead_code)]
pub fn create_test_services(store: MemoryStore, scoring: ScoringMode) -> Arc<Services> {
    let mut config = Config::default();
    config.search.scoring = scoring;
    let store = Arc::new(store);
    Arc::new(Services::with_stores(config, store.clone(), store))
}

/// Services over a JSON snapshot in a fresh temp dir
#[allow(dead_code)]
pub fn create_json_services() -> (Arc<Services>, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let mut config = Config::default();
    config.storage.data_dir = temp_dir.path().to_path_buf();

    (Arc::new(Services::new(config)), temp_dir)
}

#[allow(dead_code)]
pub fn result_titles(response: &SearchResponse) -> Vec<String> {
    response.items.iter().map(|i| i.title.clone()).collect()
}

fn unreachable_store() -> MarketError {
    MarketError::DataAccess("store unreachable".to_string())
}

/// Store whose every call fails
#[allow(dead_code)]
pub struct FailingStore;

#[async_trait]
impl ListingStore for FailingStore {
    async fn open_listings(&self) -> Result<Vec<Listing>> {
        Err(unreachable_store())
    }

    async fn listings_by_ids(&self, _ids: &[ListingId]) -> Result<Vec<Listing>> {
        Err(unreachable_store())
    }

    async fn listing_by_slug(&self, _slug: &str) -> Result<Option<Listing>> {
        Err(unreachable_store())
    }

    async fn insert_listing(&self, _draft: ListingDraft) -> Result<StoredListing> {
        Err(unreachable_store())
    }

    async fn set_status(&self, _id: ListingId, _status: ListingStatus) -> Result<Listing> {
        Err(unreachable_store())
    }
}

#[async_trait]
impl ImageStore for FailingStore {
    async fn images_for_listings(&self, _ids: &[ListingId]) -> Result<Vec<Image>> {
        Err(unreachable_store())
    }
}

/// Image store wrapper that records how it is called
#[allow(dead_code)]
pub struct CountingImageStore {
    inner: Arc<MemoryStore>,
    calls: AtomicUsize,
    requested: Mutex<Vec<Vec<ListingId>>>,
}

#[allow(dead_code)]
impl CountingImageStore {
    pub fn new(inner: Arc<MemoryStore>) -> Self {
        Self {
            inner,
            calls: AtomicUsize::new(0),
            requested: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Listing ids passed to each lookup, in call order
    pub fn requested(&self) -> Vec<Vec<ListingId>> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImageStore for CountingImageStore {
    async fn images_for_listings(&self, ids: &[ListingId]) -> Result<Vec<Image>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requested.lock().unwrap().push(ids.to_vec());
        self.inner.images_for_listings(ids).await
    }
}
