//! Listing search and ranking.
//!
//! The pipeline runs leaf-first:
//!
//! - **normalize**: German umlaut/digraph query variants
//! - **scorer**: trigram or substring relevance per variant
//! - **ranker**: best score per listing, deterministic total order
//! - **paginate**: fixed-size pages with total count
//! - **cover**: batched cover image selection per page
//! - **service**: the coordinator tying them together

mod cover;
mod normalize;
mod paginate;
mod ranker;
mod scorer;
mod service;

pub use cover::{ordered_references, resolve_covers, select_covers, CoverSelection};
pub use normalize::normalize;
pub use paginate::{
    paginate, sanitize_page, sanitize_page_size, slice_page, Page, DEFAULT_PAGE_SIZE,
};
pub use ranker::{compare, rank, score_candidates, RankedCandidate};
pub use scorer::{select_scorer, Scorer, StructuralScorer, SubstringScorer};
pub use service::SearchService;
