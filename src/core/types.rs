//! Core data types for the plotmarket engine.
//!
//! This module defines listings, images, search requests and
//! responses, and the listing detail view.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Serial identity of a listing
pub type ListingId = i64;

/// Insertion-order identity of an image
pub type ImageId = i64;

/// Visibility state of a listing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ListingStatus {
    #[default]
    Open,
    Closed,
    Hidden,
}

impl ListingStatus {
    /// Only open listings are searchable
    pub fn is_searchable(self) -> bool {
        self == ListingStatus::Open
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ListingStatus::Open => "OPEN",
            ListingStatus::Closed => "CLOSED",
            ListingStatus::Hidden => "HIDDEN",
        }
    }
}

impl fmt::Display for ListingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ListingStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "OPEN" => Ok(ListingStatus::Open),
            "CLOSED" => Ok(ListingStatus::Closed),
            "HIDDEN" => Ok(ListingStatus::Hidden),
            other => Err(format!(
                "Unknown listing status '{other}' (expected OPEN, CLOSED or HIDDEN)"
            )),
        }
    }
}

/// A single marketplace posting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: ListingId,

    /// Short URL-safe handle, `^[A-Za-z0-9]{1,8}$`
    pub slug: String,

    pub title: String,

    pub description: String,

    pub created_at: DateTime<Utc>,

    #[serde(default)]
    pub status: ListingStatus,

    /// Owning user, if known
    #[serde(default)]
    pub owner_id: Option<i64>,
}

/// Image metadata; pixel data lives with the media host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    /// Insertion-order identity (lower = older)
    pub id: ImageId,

    pub listing_id: ListingId,

    /// Media host reference (public id)
    pub reference: String,

    #[serde(default)]
    pub primary: bool,
}

/// A listing as submitted by a seller, before validation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewListing {
    pub title: String,
    pub description: String,

    /// Media host references, first one becomes the cover
    #[serde(default)]
    pub image_refs: Vec<String>,

    #[serde(default)]
    pub owner_id: Option<i64>,
}

/// Request to search listings
///
/// Page inputs are signed so that malformed values can be
/// sanitized rather than rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Free-text query; absent or blank lists everything by recency
    #[serde(default)]
    pub query: Option<String>,

    /// Reserved, not filtered upon yet
    #[serde(default)]
    pub location: Option<String>,

    /// 1-based page number
    #[serde(default)]
    pub page: Option<i64>,

    #[serde(default)]
    pub page_size: Option<i64>,
}

impl SearchRequest {
    /// Request for a query with default paging
    pub fn query(query: impl Into<String>) -> Self {
        Self {
            query: Some(query.into()),
            ..Default::default()
        }
    }

    /// Builder-style page selection
    pub fn with_page(mut self, page: i64, page_size: i64) -> Self {
        self.page = Some(page);
        self.page_size = Some(page_size);
        self
    }
}

/// One listing on a result page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResultItem {
    pub id: ListingId,
    pub slug: String,
    pub title: String,
    pub description: String,

    /// Reference of the cover image, absent when the listing has none
    pub cover_image: Option<String>,

    pub image_count: usize,

    pub created_at: DateTime<Utc>,
}

/// Response from a search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub items: Vec<SearchResultItem>,

    /// Number of matching listings across all pages
    pub total: usize,

    /// Sanitized page number
    pub page: u64,

    /// Sanitized page size
    pub page_size: u64,
}

impl SearchResponse {
    /// Number of pages needed to show every match
    pub fn page_count(&self) -> u64 {
        if self.page_size == 0 {
            return 0;
        }
        (self.total as u64).div_ceil(self.page_size)
    }
}

/// Full view of one listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingDetail {
    pub id: ListingId,
    pub slug: String,
    pub title: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub status: ListingStatus,

    /// Image references, cover first, then by insertion order
    pub images: Vec<String>,
}
