//! Search coordinator.
//!
//! Drives normalize -> score -> rank -> paginate -> covers for one
//! request. The service holds no mutable state; concurrent calls
//! only share the stores.

use crate::core::config::SearchConfig;
use crate::core::error::Result;
use crate::core::search::cover::resolve_covers;
use crate::core::search::normalize::normalize;
use crate::core::search::paginate::{sanitize_page, sanitize_page_size, slice_page};
use crate::core::search::ranker::{rank, score_candidates};
use crate::core::search::scorer::{select_scorer, Scorer};
use crate::core::storage::{ImageStore, ListingStore};
use crate::core::types::{ListingId, SearchRequest, SearchResponse, SearchResultItem};
use std::sync::Arc;
use std::time::Instant;

/// Listing search service
pub struct SearchService {
    listings: Arc<dyn ListingStore>,
    images: Arc<dyn ImageStore>,
    scorer: Box<dyn Scorer>,
    default_page_size: u64,
    max_page_size: Option<u64>,
    max_query_length: usize,
}

impl SearchService {
    /// Create a search service.
    ///
    /// The scoring strategy is fixed here, once, from the configured
    /// mode and the listing store's capabilities.
    pub fn new(
        listings: Arc<dyn ListingStore>,
        images: Arc<dyn ImageStore>,
        config: &SearchConfig,
    ) -> Self {
        let scorer = select_scorer(
            config.scoring,
            listings.supports_structural_similarity(),
            config.similarity_threshold,
        );
        tracing::debug!("Search scoring strategy: {}", scorer.name());

        Self {
            listings,
            images,
            scorer,
            default_page_size: config.default_page_size,
            max_page_size: config.max_page_size,
            max_query_length: config.max_query_length,
        }
    }

    /// Name of the active scoring strategy
    pub fn scoring_strategy(&self) -> &'static str {
        self.scorer.name()
    }

    /// Execute a search.
    ///
    /// Pagination input is sanitized, never rejected. Store failures
    /// propagate unchanged; there is no partial response.
    pub async fn search(&self, request: SearchRequest) -> Result<SearchResponse> {
        let start = Instant::now();

        let query = request
            .query
            .as_deref()
            .map(|q| truncate_chars(q, self.max_query_length))
            .unwrap_or_default();
        let variants = normalize(query);

        let page = sanitize_page(request.page);
        let page_size = sanitize_page_size(request.page_size, self.default_page_size);
        let page_size = match self.max_page_size {
            Some(max) => page_size.min(max),
            None => page_size,
        };

        let listings = self.listings.open_listings().await?;
        let scanned = listings.len();

        let candidates = score_candidates(self.scorer.as_ref(), &variants, listings);
        let ranked = rank(candidates);
        let page = slice_page(ranked, page, page_size);

        // Covers only for what is on this page
        let ids: Vec<ListingId> = page.items.iter().map(|l| l.id).collect();
        let mut covers = resolve_covers(self.images.as_ref(), &ids).await?;

        let items: Vec<SearchResultItem> = page
            .items
            .into_iter()
            .map(|listing| {
                let selection = covers.remove(&listing.id).unwrap_or_default();
                SearchResultItem {
                    id: listing.id,
                    slug: listing.slug,
                    title: listing.title,
                    description: listing.description,
                    cover_image: selection.cover,
                    image_count: selection.image_count,
                    created_at: listing.created_at,
                }
            })
            .collect();

        let duration_ms = start.elapsed().as_millis() as u64;
        tracing::debug!(
            variants = variants.len(),
            scanned,
            matched = page.total,
            returned = items.len(),
            strategy = self.scorer.name(),
            duration_ms,
            "Search completed"
        );

        Ok(SearchResponse {
            items,
            total: page.total,
            page: page.page,
            page_size: page.page_size,
        })
    }
}

/// First `max` characters of `s`, on a char boundary
fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
