//! Search command - find open listings by free text

use crate::cli::output::{colors, format_relative_time, truncate};
use crate::cli::OutputFormat;
use crate::core::services::Services;
use crate::core::types::{SearchRequest, SearchResponse};
use clap::Args;
use std::sync::Arc;

/// Arguments for the search command
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Search query; omit to list all open listings, newest first
    pub query: Option<String>,

    /// Location hint (accepted, not filtered upon yet)
    #[arg(long, short = 'l')]
    pub location: Option<String>,

    /// Page number, starting at 1
    #[arg(long, short = 'p', allow_hyphen_values = true)]
    pub page: Option<i64>,

    /// Listings per page
    #[arg(long, short = 'n', allow_hyphen_values = true)]
    pub page_size: Option<i64>,
}

impl From<SearchArgs> for SearchRequest {
    fn from(args: SearchArgs) -> Self {
        SearchRequest {
            query: args.query,
            location: args.location,
            page: args.page,
            page_size: args.page_size,
        }
    }
}

/// Execute the search command
pub async fn execute(
    args: SearchArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let query = args.query.clone();
    let response = services.search.search(args.into()).await?;

    match format {
        OutputFormat::Human => print_human(query.as_deref(), &response),
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}

fn print_human(query: Option<&str>, response: &SearchResponse) {
    let query = query.map(str::trim).filter(|q| !q.is_empty());

    if response.items.is_empty() {
        match (query, response.total) {
            (Some(q), 0) => println!("No listings found for '{}'", colors::label(q)),
            (None, 0) => println!("No open listings yet"),
            _ => println!(
                "Page {} is past the end ({} listing(s) on {} page(s))",
                colors::number(&response.page.to_string()),
                colors::number(&response.total.to_string()),
                colors::number(&response.page_count().to_string())
            ),
        }
        return;
    }

    println!(
        "{} listing(s), page {} of {}:\n",
        colors::number(&response.total.to_string()),
        colors::number(&response.page.to_string()),
        colors::number(&response.page_count().to_string())
    );

    let offset = (response.page.saturating_sub(1)) * response.page_size;
    for (i, item) in response.items.iter().enumerate() {
        println!(
            "[{}] {} {} {}",
            colors::rank(&(offset + i as u64 + 1).to_string()),
            colors::slug(&item.slug),
            colors::label(&item.title),
            colors::dim(&format!("({})", format_relative_time(&item.created_at)))
        );
        println!("    {}", colors::dim(&truncate(&item.description, 100)));
        match &item.cover_image {
            Some(cover) => println!(
                "    cover: {} {}",
                colors::image(cover),
                colors::dim(&format!("({} image(s))", item.image_count))
            ),
            None => println!("    {}", colors::dim("no images")),
        }
        println!();
    }
}
