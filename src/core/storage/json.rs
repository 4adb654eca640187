//! JSON snapshot store.
//!
//! Listings and images live in a single `market.json` inside the
//! data directory. Every read loads the file afresh; writes are
//! serialized through a lock and replace the file atomically via a
//! temporary sibling and rename.

use crate::core::error::{MarketError, Result};
use crate::core::storage::snapshot::{ListingDraft, MarketData, StoredListing};
use crate::core::storage::{ImageStore, ListingStore};
use crate::core::types::{Image, Listing, ListingId, ListingStatus};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

/// Snapshot file name inside the data directory
pub const SNAPSHOT_FILE: &str = "market.json";

/// File-backed listing and image store
pub struct JsonStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonStore {
    /// Store rooted at `data_dir`; the file is created on first write
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            path: data_dir.as_ref().join(SNAPSHOT_FILE),
            write_lock: Mutex::new(()),
        }
    }

    /// Full path of the snapshot file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the snapshot; a missing file is an empty market
    pub async fn load(&self) -> Result<MarketData> {
        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(MarketData::new());
            }
            Err(e) => {
                return Err(MarketError::DataAccess(format!(
                    "Failed to read {}: {e}",
                    self.path.display()
                )))
            }
        };

        serde_json::from_str(&contents).map_err(|e| {
            MarketError::DataAccess(format!("Corrupt snapshot {}: {e}", self.path.display()))
        })
    }

    async fn save(&self, data: &MarketData) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                MarketError::DataAccess(format!("Failed to create {}: {e}", parent.display()))
            })?;
        }

        let json = serde_json::to_string_pretty(data)?;
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, json)
            .await
            .map_err(|e| MarketError::DataAccess(format!("Failed to write snapshot: {e}")))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| MarketError::DataAccess(format!("Failed to replace snapshot: {e}")))?;

        tracing::debug!(
            listings = data.listings.len(),
            images = data.images.len(),
            "Snapshot written"
        );
        Ok(())
    }

    /// Load, apply `change`, save, all under the write lock
    async fn update<T>(&self, change: impl FnOnce(&mut MarketData) -> Result<T>) -> Result<T> {
        let _guard = self.write_lock.lock().await;
        let mut data = self.load().await?;
        let out = change(&mut data)?;
        self.save(&data).await?;
        Ok(out)
    }
}

#[async_trait]
impl ListingStore for JsonStore {
    async fn open_listings(&self) -> Result<Vec<Listing>> {
        Ok(self.load().await?.open_listings())
    }

    async fn listings_by_ids(&self, ids: &[ListingId]) -> Result<Vec<Listing>> {
        Ok(self.load().await?.listings_by_ids(ids))
    }

    async fn listing_by_slug(&self, slug: &str) -> Result<Option<Listing>> {
        Ok(self.load().await?.listing_by_slug(slug))
    }

    async fn insert_listing(&self, draft: ListingDraft) -> Result<StoredListing> {
        self.update(|data| data.insert_listing(draft)).await
    }

    async fn set_status(&self, id: ListingId, status: ListingStatus) -> Result<Listing> {
        self.update(|data| data.set_status(id, status)).await
    }
}

#[async_trait]
impl ImageStore for JsonStore {
    async fn images_for_listings(&self, ids: &[ListingId]) -> Result<Vec<Image>> {
        Ok(self.load().await?.images_for_listings(ids))
    }
}
