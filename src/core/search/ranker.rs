//! Combining variant scores and ordering listings.

use crate::core::search::scorer::Scorer;
use crate::core::types::Listing;
use std::cmp::Ordering;

/// A listing with its best score across all query variants
#[derive(Debug, Clone)]
pub struct RankedCandidate {
    pub listing: Listing,
    pub score: f64,
}

impl RankedCandidate {
    pub fn new(listing: Listing, score: f64) -> Self {
        Self { listing, score }
    }
}

/// Score every searchable listing against every variant.
///
/// Listings that are not OPEN are dropped before scoring. With no
/// variants (blank query) every open listing passes with score 0;
/// otherwise listings no variant matched are excluded.
pub fn score_candidates(
    scorer: &dyn Scorer,
    variants: &[String],
    listings: Vec<Listing>,
) -> Vec<RankedCandidate> {
    listings
        .into_iter()
        .filter(|listing| listing.status.is_searchable())
        .filter_map(|listing| {
            if variants.is_empty() {
                return Some(RankedCandidate::new(listing, 0.0));
            }

            let best = variants
                .iter()
                .filter_map(|variant| scorer.score(variant, &listing))
                .fold(None, |acc: Option<f64>, s| Some(acc.map_or(s, |a| a.max(s))));

            best.map(|score| RankedCandidate::new(listing, score))
        })
        .collect()
}

/// Total order: score, then creation time, then id, all descending
pub fn compare(a: &RankedCandidate, b: &RankedCandidate) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| b.listing.created_at.cmp(&a.listing.created_at))
        .then_with(|| b.listing.id.cmp(&a.listing.id))
}

/// Order candidates and hand back the listings, best first
pub fn rank(mut candidates: Vec<RankedCandidate>) -> Vec<Listing> {
    candidates.sort_by(compare);
    candidates.into_iter().map(|c| c.listing).collect()
}
