//! plotmarket - Search for local garden-plot and produce classifieds
//!
//! Listings ("ads") carry a title, a description and up to five
//! images. Browsers search them by free text; the engine expands
//! German umlaut spellings, scores listings by trigram similarity
//! (or substring containment when that is unavailable), orders
//! them deterministically, pages the result and attaches each
//! listing's cover image.
//!
//! # Architecture
//!
//! - **core**: Domain logic (transport-agnostic)
//!   - config, error, types, xdg
//!   - storage (listing and image stores)
//!   - search (normalize, score, rank, paginate, covers)
//!   - listings (post, detail, status)
//!   - services (unified service container)
//!
//! - **cli**: Command-line adapter (depends on core)

// Core domain logic (transport-agnostic)
pub mod core;

// CLI adapter
pub mod cli;

// Re-export commonly used types for convenience
pub use core::config::Config;
pub use core::error::{MarketError, Result};
pub use core::services::Services;
pub use core::storage::{ImageStore, JsonStore, ListingStore, MemoryStore};
pub use core::types::*;
