//! Posting, viewing and closing listings.
//!
//! Validation limits follow the listing schema: titles up to 50
//! characters, descriptions up to 500, at most five images whose
//! references fit in 50 characters.

use crate::core::error::{FieldErrors, MarketError, Result};
use crate::core::search::ordered_references;
use crate::core::storage::{ImageStore, ListingDraft, ListingStore, StoredListing};
use crate::core::types::{Listing, ListingDetail, ListingStatus, NewListing};
use chrono::Utc;
use once_cell::sync::Lazy;
use rand::Rng;
use regex::Regex;
use std::sync::Arc;

pub const MAX_TITLE_CHARS: usize = 50;
pub const MAX_DESCRIPTION_CHARS: usize = 500;
pub const MAX_IMAGES: usize = 5;
pub const MAX_IMAGE_REF_CHARS: usize = 50;
pub const SLUG_LENGTH: usize = 8;

/// Attempts at finding an unused slug before giving up
const SLUG_ATTEMPTS: usize = 5;

const SLUG_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

static SLUG_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9]{1,8}$").unwrap());

/// Whether `slug` is a well-formed listing slug
pub fn is_valid_slug(slug: &str) -> bool {
    SLUG_PATTERN.is_match(slug)
}

/// Random 8-character alphanumeric slug
pub fn generate_slug() -> String {
    let mut rng = rand::thread_rng();
    (0..SLUG_LENGTH)
        .map(|_| SLUG_ALPHABET[rng.gen_range(0..SLUG_ALPHABET.len())] as char)
        .collect()
}

/// Trim and check a submitted listing, reporting every bad field
pub fn validate_listing(listing: &NewListing) -> std::result::Result<NewListing, FieldErrors> {
    let title = listing.title.trim().to_string();
    let description = listing.description.trim().to_string();
    let image_refs: Vec<String> = listing
        .image_refs
        .iter()
        .map(|r| r.trim().to_string())
        .filter(|r| !r.is_empty())
        .collect();

    let mut errors = FieldErrors::default();

    if title.is_empty() {
        errors.title = Some("Titel ist erforderlich".to_string());
    } else if title.chars().count() > MAX_TITLE_CHARS {
        errors.title = Some(format!("Maximal {MAX_TITLE_CHARS} Zeichen"));
    }

    if description.is_empty() {
        errors.description = Some("Beschreibung ist erforderlich".to_string());
    } else if description.chars().count() > MAX_DESCRIPTION_CHARS {
        errors.description = Some(format!("Maximal {MAX_DESCRIPTION_CHARS} Zeichen"));
    }

    if image_refs.len() > MAX_IMAGES {
        errors.images = Some(format!("Maximal {MAX_IMAGES} Bilder erlaubt"));
    } else if image_refs
        .iter()
        .any(|r| r.chars().count() > MAX_IMAGE_REF_CHARS)
    {
        errors.images = Some(format!(
            "Bild-IDs dürfen maximal {MAX_IMAGE_REF_CHARS} Zeichen lang sein"
        ));
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(NewListing {
        title,
        description,
        image_refs,
        owner_id: listing.owner_id,
    })
}

/// Listing lifecycle operations
pub struct ListingService {
    listings: Arc<dyn ListingStore>,
    images: Arc<dyn ImageStore>,
}

impl ListingService {
    pub fn new(listings: Arc<dyn ListingStore>, images: Arc<dyn ImageStore>) -> Self {
        Self { listings, images }
    }

    /// Validate and store a new listing with its images.
    ///
    /// The listing and its images are written in one store call, so a
    /// failure leaves neither behind. The first image becomes the
    /// cover. Slug collisions are retried with a fresh slug a few times.
    pub async fn post_listing(&self, listing: NewListing) -> Result<StoredListing> {
        let listing = validate_listing(&listing)
            .map_err(|field_errors| MarketError::InvalidListing { field_errors })?;

        let mut attempt = 0;
        let stored = loop {
            attempt += 1;
            let draft = ListingDraft {
                slug: generate_slug(),
                title: listing.title.clone(),
                description: listing.description.clone(),
                created_at: Utc::now(),
                owner_id: listing.owner_id,
                image_refs: listing.image_refs.clone(),
            };

            match self.listings.insert_listing(draft).await {
                Ok(stored) => break stored,
                Err(MarketError::SlugConflict(slug)) if attempt < SLUG_ATTEMPTS => {
                    tracing::debug!("Slug '{}' taken, retrying", slug);
                }
                Err(e) => return Err(e),
            }
        };

        tracing::info!(
            listing_id = stored.listing.id,
            images = stored.images.len(),
            "Listing posted"
        );
        Ok(stored)
    }

    /// Listing with all image references, cover first.
    ///
    /// Malformed slugs are treated as unknown without a store lookup.
    pub async fn listing_detail(&self, slug: &str) -> Result<Option<ListingDetail>> {
        if !is_valid_slug(slug) {
            return Ok(None);
        }

        let Some(listing) = self.listings.listing_by_slug(slug).await? else {
            return Ok(None);
        };

        let images = self.images.images_for_listings(&[listing.id]).await?;

        Ok(Some(ListingDetail {
            id: listing.id,
            slug: listing.slug,
            title: listing.title,
            description: listing.description,
            created_at: listing.created_at,
            status: listing.status,
            images: ordered_references(images),
        }))
    }

    /// Change the status of the listing with `slug`
    pub async fn set_status(&self, slug: &str, status: ListingStatus) -> Result<Listing> {
        let listing = if is_valid_slug(slug) {
            self.listings.listing_by_slug(slug).await?
        } else {
            None
        };
        let listing = listing.ok_or_else(|| MarketError::ListingNotFound(slug.to_string()))?;

        let updated = self.listings.set_status(listing.id, status).await?;
        tracing::info!(listing_id = updated.id, status = %status, "Listing status changed");
        Ok(updated)
    }
}
