//! In-memory listing and image snapshot.
//!
//! Both store implementations keep their state in a [`MarketData`];
//! the JSON store serializes it to disk between calls.

use crate::core::error::{MarketError, Result};
use crate::core::types::{Image, ImageId, Listing, ListingId, ListingStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A validated listing ready to be stored
#[derive(Debug, Clone)]
pub struct ListingDraft {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub owner_id: Option<i64>,

    /// Image references, stored in the same write as the listing
    pub image_refs: Vec<String>,
}

/// A freshly stored listing with the images written alongside it
#[derive(Debug, Clone, PartialEq)]
pub struct StoredListing {
    pub listing: Listing,
    pub images: Vec<Image>,
}

/// All listings and images at one point in time
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MarketData {
    #[serde(default)]
    pub listings: Vec<Listing>,
    #[serde(default)]
    pub images: Vec<Image>,
    #[serde(default)]
    next_listing_id: ListingId,
    #[serde(default)]
    next_image_id: ImageId,
}

impl MarketData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a fully formed listing, keeping id allocation ahead of it
    pub fn push_listing(&mut self, listing: Listing) {
        self.next_listing_id = self.next_listing_id.max(listing.id);
        self.listings.push(listing);
    }

    /// Add a fully formed image, keeping id allocation ahead of it
    pub fn push_image(&mut self, image: Image) {
        self.next_image_id = self.next_image_id.max(image.id);
        self.images.push(image);
    }

    pub fn open_listings(&self) -> Vec<Listing> {
        self.listings
            .iter()
            .filter(|l| l.status.is_searchable())
            .cloned()
            .collect()
    }

    pub fn listings_by_ids(&self, ids: &[ListingId]) -> Vec<Listing> {
        let wanted: HashSet<ListingId> = ids.iter().copied().collect();
        self.listings
            .iter()
            .filter(|l| wanted.contains(&l.id))
            .cloned()
            .collect()
    }

    pub fn listing_by_slug(&self, slug: &str) -> Option<Listing> {
        self.listings.iter().find(|l| l.slug == slug).cloned()
    }

    /// Store a draft and its images under the next ids.
    ///
    /// Slugs must be unique. On conflict nothing is written.
    pub fn insert_listing(&mut self, draft: ListingDraft) -> Result<StoredListing> {
        if self.listings.iter().any(|l| l.slug == draft.slug) {
            return Err(MarketError::SlugConflict(draft.slug));
        }

        self.next_listing_id += 1;
        let listing = Listing {
            id: self.next_listing_id,
            slug: draft.slug,
            title: draft.title,
            description: draft.description,
            created_at: draft.created_at,
            status: ListingStatus::Open,
            owner_id: draft.owner_id,
        };
        self.listings.push(listing.clone());
        let images = self.attach_images(listing.id, &draft.image_refs);

        Ok(StoredListing { listing, images })
    }

    pub fn set_status(&mut self, id: ListingId, status: ListingStatus) -> Result<Listing> {
        let listing = self
            .listings
            .iter_mut()
            .find(|l| l.id == id)
            .ok_or_else(|| MarketError::ListingNotFound(id.to_string()))?;
        listing.status = status;
        Ok(listing.clone())
    }

    /// Images of the given listings, in insertion order
    pub fn images_for_listings(&self, ids: &[ListingId]) -> Vec<Image> {
        let wanted: HashSet<ListingId> = ids.iter().copied().collect();
        self.images
            .iter()
            .filter(|img| wanted.contains(&img.listing_id))
            .cloned()
            .collect()
    }

    /// Attach images to a stored listing.
    ///
    /// The first new image becomes primary unless the listing
    /// already has one.
    fn attach_images(&mut self, listing_id: ListingId, refs: &[String]) -> Vec<Image> {
        let mut needs_primary = !self
            .images
            .iter()
            .any(|img| img.listing_id == listing_id && img.primary);

        let mut inserted = Vec::with_capacity(refs.len());
        for reference in refs {
            self.next_image_id += 1;
            let image = Image {
                id: self.next_image_id,
                listing_id,
                reference: reference.clone(),
                primary: needs_primary,
            };
            needs_primary = false;
            self.images.push(image.clone());
            inserted.push(image);
        }

        inserted
    }
}
