//! Show command - display one listing with all its images

use crate::cli::output::{colors, format_relative_time};
use crate::cli::OutputFormat;
use crate::core::error::MarketError;
use crate::core::services::Services;
use clap::Args;
use std::sync::Arc;

/// Arguments for the show command
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Listing slug
    pub slug: String,
}

/// Execute the show command
pub async fn execute(
    args: ShowArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let detail = services
        .listings
        .listing_detail(&args.slug)
        .await?
        .ok_or_else(|| MarketError::ListingNotFound(args.slug.clone()))?;

    match format {
        OutputFormat::Human => {
            println!("{} {}", colors::slug(&detail.slug), colors::label(&detail.title));
            println!(
                "  {} {}",
                colors::dim(detail.status.as_str()),
                colors::dim(&format!(
                    "posted {} ({})",
                    format_relative_time(&detail.created_at),
                    detail.created_at.format("%Y-%m-%d %H:%M UTC")
                ))
            );
            println!();
            for line in detail.description.lines() {
                println!("  {line}");
            }
            if !detail.images.is_empty() {
                println!();
                println!("  {}", colors::label("Images:"));
                for (i, image) in detail.images.iter().enumerate() {
                    let marker = if i == 0 { " (cover)" } else { "" };
                    println!("    {}{}", colors::image(image), colors::dim(marker));
                }
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&detail)?);
        }
    }

    Ok(())
}
