//! Set-status command - open, close or hide a listing

use crate::cli::output::colors;
use crate::cli::OutputFormat;
use crate::core::services::Services;
use crate::core::types::ListingStatus;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the set-status command
#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Listing slug
    pub slug: String,

    /// New status: OPEN, CLOSED or HIDDEN
    pub status: ListingStatus,
}

/// Status change response
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub slug: String,
    pub status: ListingStatus,
    pub searchable: bool,
}

/// Execute the set-status command
pub async fn execute(
    args: StatusArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let listing = services.listings.set_status(&args.slug, args.status).await?;

    let response = StatusResponse {
        slug: listing.slug,
        searchable: listing.status.is_searchable(),
        status: listing.status,
    };

    match format {
        OutputFormat::Human => {
            println!(
                "{} {} is now {}",
                colors::success("Updated"),
                colors::slug(&response.slug),
                colors::label(response.status.as_str())
            );
            if !response.searchable {
                println!("  {}", colors::dim("hidden from search results"));
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
