//! Core domain logic (transport-agnostic)
//!
//! This module contains all business logic that is independent
//! of how requests arrive.
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **types**: Listings, images, requests, responses
//! - **xdg**: XDG directory handling
//! - **storage**: Listing and image stores (memory, JSON snapshot)
//! - **search**: Normalize, score, rank, paginate, select covers
//! - **listings**: Posting, detail and status changes
//! - **services**: Unified service container

pub mod config;
pub mod error;
pub mod listings;
pub mod search;
pub mod services;
pub mod storage;
pub mod types;
pub mod xdg;

// Re-export key types for convenience
pub use config::Config;
pub use error::{MarketError, Result};
pub use services::Services;
