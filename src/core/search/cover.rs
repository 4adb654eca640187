//! Cover image selection for a page of listings.
//!
//! The primary flag is not guaranteed at write time, so the cover
//! is derived on read: the primary image if there is one, else the
//! oldest image (lowest id), else none.

use crate::core::error::Result;
use crate::core::storage::ImageStore;
use crate::core::types::{Image, ImageId, ListingId};
use std::collections::HashMap;

/// Derived cover and image count for one listing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoverSelection {
    pub cover: Option<String>,
    pub image_count: usize,
}

/// Pick covers from an already fetched batch of images.
///
/// Every id in `listing_ids` gets an entry, with a count of zero and
/// no cover when it owns no images. If several images claim to be
/// primary the lowest-id one wins.
pub fn select_covers(listing_ids: &[ListingId], images: &[Image]) -> HashMap<ListingId, CoverSelection> {
    // (is primary, id, reference) of the current best per listing
    let mut best: HashMap<ListingId, (bool, ImageId, &str)> = HashMap::new();
    let mut counts: HashMap<ListingId, usize> = HashMap::new();

    for image in images {
        *counts.entry(image.listing_id).or_default() += 1;

        let candidate = (image.primary, image.id, image.reference.as_str());
        best.entry(image.listing_id)
            .and_modify(|current| {
                let better = match (candidate.0, current.0) {
                    (true, false) => true,
                    (false, true) => false,
                    _ => candidate.1 < current.1,
                };
                if better {
                    *current = candidate;
                }
            })
            .or_insert(candidate);
    }

    listing_ids
        .iter()
        .map(|id| {
            let selection = CoverSelection {
                cover: best.get(id).map(|(_, _, reference)| reference.to_string()),
                image_count: counts.get(id).copied().unwrap_or(0),
            };
            (*id, selection)
        })
        .collect()
}

/// Resolve covers for a page with a single image-store round-trip
pub async fn resolve_covers(
    store: &dyn ImageStore,
    listing_ids: &[ListingId],
) -> Result<HashMap<ListingId, CoverSelection>> {
    if listing_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let images = store.images_for_listings(listing_ids).await?;
    Ok(select_covers(listing_ids, &images))
}

/// Image references of one listing, cover first, then oldest first
pub fn ordered_references(mut images: Vec<Image>) -> Vec<String> {
    images.sort_by(|a, b| b.primary.cmp(&a.primary).then(a.id.cmp(&b.id)));
    images.into_iter().map(|img| img.reference).collect()
}
