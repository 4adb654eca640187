//! Listing and image stores.
//!
//! The search engine reads listings and image metadata only
//! through the [`ListingStore`] and [`ImageStore`] traits. Stores
//! enforce their own timeout and retry policy; callers treat any
//! error as a data-access failure and never retry.
//!
//! # Implementations
//!
//! - **MemoryStore**: in-process snapshot, used by tests and embedders
//! - **JsonStore**: `market.json` in the data directory, used by the CLI
//!
//! ```text
//! {data_dir}/
//! └── market.json     # listings, images, id counters
//! ```

mod json;
mod memory;
mod snapshot;

pub use json::{JsonStore, SNAPSHOT_FILE};
pub use memory::MemoryStore;
pub use snapshot::{ListingDraft, MarketData, StoredListing};

use crate::core::error::Result;
use crate::core::types::{Image, Listing, ListingId, ListingStatus};
use async_trait::async_trait;

/// Source of listings
#[async_trait]
pub trait ListingStore: Send + Sync {
    /// All OPEN listings, for scoring
    async fn open_listings(&self) -> Result<Vec<Listing>>;

    /// Listings with the given ids, any status, in store order
    async fn listings_by_ids(&self, ids: &[ListingId]) -> Result<Vec<Listing>>;

    async fn listing_by_slug(&self, slug: &str) -> Result<Option<Listing>>;

    /// Store a validated listing together with its images.
    ///
    /// Both are written or neither is. `SlugConflict` if the slug is
    /// taken. The first image is the listing's primary.
    async fn insert_listing(&self, draft: ListingDraft) -> Result<StoredListing>;

    async fn set_status(&self, id: ListingId, status: ListingStatus) -> Result<Listing>;

    /// Whether trigram similarity can run against this store
    fn supports_structural_similarity(&self) -> bool {
        true
    }
}

/// Source of image metadata
#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Every image owned by any of `ids`, in one round-trip
    async fn images_for_listings(&self, ids: &[ListingId]) -> Result<Vec<Image>>;
}
