//! Error types and error handling for the plotmarket engine.
//!
//! This module defines the error types used throughout the
//! library. The search path itself has no bad-request case:
//! malformed pagination input is sanitized, and only store
//! failures surface as errors.

use serde::Serialize;
use thiserror::Error;

/// Result type alias for plotmarket operations
pub type Result<T> = std::result::Result<T, MarketError>;

/// Per-field validation messages for a rejected listing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldErrors {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<String>,
}

impl FieldErrors {
    /// True when no field carries a message
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.images.is_none()
    }

    /// Field names that failed validation, in form order
    pub fn fields(&self) -> Vec<&'static str> {
        let mut fields = Vec::new();
        if self.title.is_some() {
            fields.push("title");
        }
        if self.description.is_some() {
            fields.push("description");
        }
        if self.images.is_some() {
            fields.push("images");
        }
        fields
    }
}

/// Main error type for the marketplace engine
#[derive(Error, Debug)]
pub enum MarketError {
    #[error("Listing not found: {0}")]
    ListingNotFound(String),

    #[error("Invalid listing: {}", .field_errors.fields().join(", "))]
    InvalidListing { field_errors: FieldErrors },

    #[error("Slug already taken: {0}")]
    SlugConflict(String),

    #[error("Data access failed: {0}")]
    DataAccess(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl MarketError {
    /// Check if this is a "not found" type error
    pub fn is_not_found(&self) -> bool {
        matches!(self, MarketError::ListingNotFound(_))
    }

    /// Check if this is a conflict error (slug already taken)
    pub fn is_conflict(&self) -> bool {
        matches!(self, MarketError::SlugConflict(_))
    }

    /// Check if this is a bad request error (invalid input)
    pub fn is_bad_request(&self) -> bool {
        matches!(
            self,
            MarketError::InvalidListing { .. } | MarketError::ConfigError(_)
        )
    }

    /// Check if the listing or image store failed
    pub fn is_data_access(&self) -> bool {
        matches!(
            self,
            MarketError::DataAccess(_) | MarketError::IoError(_) | MarketError::SerdeError(_)
        )
    }
}
