//! Post command - publish a new listing

use crate::cli::output::colors;
use crate::cli::OutputFormat;
use crate::core::error::MarketError;
use crate::core::services::Services;
use crate::core::storage::StoredListing;
use crate::core::types::NewListing;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the post command
#[derive(Args, Debug)]
pub struct PostArgs {
    /// Listing title (max 50 characters)
    #[arg(long, short = 't')]
    pub title: String,

    /// Listing description (max 500 characters)
    #[arg(long, short = 'd')]
    pub description: String,

    /// Media host image reference; repeat for more (max 5, first is the cover)
    #[arg(long = "image", short = 'i')]
    pub images: Vec<String>,

    /// Owning user id
    #[arg(long)]
    pub owner: Option<i64>,
}

/// Post response
#[derive(Debug, Serialize)]
pub struct PostResponse {
    pub id: i64,
    pub slug: String,
    pub title: String,
    pub images: usize,
}

impl PostResponse {
    /// Summary of a stored listing; counts only images actually written
    pub fn new(stored: &StoredListing) -> Self {
        Self {
            id: stored.listing.id,
            slug: stored.listing.slug.clone(),
            title: stored.listing.title.clone(),
            images: stored.images.len(),
        }
    }
}

/// Execute the post command
pub async fn execute(
    args: PostArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let new_listing = NewListing {
        title: args.title,
        description: args.description,
        image_refs: args.images,
        owner_id: args.owner,
    };

    let stored = match services.listings.post_listing(new_listing).await {
        Ok(stored) => stored,
        Err(MarketError::InvalidListing { field_errors }) => {
            if format == OutputFormat::Json {
                println!("{}", serde_json::to_string_pretty(&field_errors)?);
            } else {
                for (field, message) in [
                    ("title", &field_errors.title),
                    ("description", &field_errors.description),
                    ("images", &field_errors.images),
                ] {
                    if let Some(message) = message {
                        eprintln!("  {}: {}", colors::label(field), colors::error(message));
                    }
                }
            }
            return Err(MarketError::InvalidListing { field_errors }.into());
        }
        Err(e) => return Err(e.into()),
    };

    let response = PostResponse::new(&stored);

    match format {
        OutputFormat::Human => {
            println!(
                "{} '{}' as {}",
                colors::success("Posted"),
                response.title,
                colors::slug(&response.slug)
            );
            if response.images > 0 {
                println!(
                    "  {} image(s) attached",
                    colors::number(&response.images.to_string())
                );
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
