//! In-process listing and image store.

use crate::core::error::{MarketError, Result};
use crate::core::storage::snapshot::{ListingDraft, MarketData, StoredListing};
use crate::core::storage::{ImageStore, ListingStore};
use crate::core::types::{Image, Listing, ListingId, ListingStatus};
use async_trait::async_trait;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Listing and image store held entirely in memory
pub struct MemoryStore {
    data: RwLock<MarketData>,
    structural_similarity: bool,
}

impl MemoryStore {
    /// Empty store with the structural facility available
    pub fn new() -> Self {
        Self::from_data(MarketData::new())
    }

    /// Store seeded with an existing snapshot
    pub fn from_data(data: MarketData) -> Self {
        Self {
            data: RwLock::new(data),
            structural_similarity: true,
        }
    }

    /// Report the structural similarity facility as (un)reachable
    pub fn with_structural_similarity(mut self, available: bool) -> Self {
        self.structural_similarity = available;
        self
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, MarketData>> {
        self.data
            .read()
            .map_err(|e| MarketError::DataAccess(format!("Memory store lock poisoned: {e}")))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, MarketData>> {
        self.data
            .write()
            .map_err(|e| MarketError::DataAccess(format!("Memory store lock poisoned: {e}")))
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ListingStore for MemoryStore {
    async fn open_listings(&self) -> Result<Vec<Listing>> {
        Ok(self.read()?.open_listings())
    }

    async fn listings_by_ids(&self, ids: &[ListingId]) -> Result<Vec<Listing>> {
        Ok(self.read()?.listings_by_ids(ids))
    }

    async fn listing_by_slug(&self, slug: &str) -> Result<Option<Listing>> {
        Ok(self.read()?.listing_by_slug(slug))
    }

    async fn insert_listing(&self, draft: ListingDraft) -> Result<StoredListing> {
        self.write()?.insert_listing(draft)
    }

    async fn set_status(&self, id: ListingId, status: ListingStatus) -> Result<Listing> {
        self.write()?.set_status(id, status)
    }

    fn supports_structural_similarity(&self) -> bool {
        self.structural_similarity
    }
}

#[async_trait]
impl ImageStore for MemoryStore {
    async fn images_for_listings(&self, ids: &[ListingId]) -> Result<Vec<Image>> {
        Ok(self.read()?.images_for_listings(ids))
    }
}
