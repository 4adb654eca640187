//! Config command - show current configuration

use crate::cli::OutputFormat;
use crate::core::config::{MediaConfig, SearchConfig};
use crate::core::services::Services;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the show-config command
#[derive(Args, Debug)]
pub struct ConfigArgs {}

/// Configuration response; media secrets are redacted
#[derive(Debug, Serialize)]
pub struct ConfigResponse {
    pub data_dir: String,
    pub scoring_strategy: &'static str,
    pub search: SearchConfig,
    pub media: MediaConfig,
}

/// Execute the show-config command
pub async fn execute(
    _args: ConfigArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = &services.config;

    let response = ConfigResponse {
        data_dir: config.storage.data_dir.to_string_lossy().into_owned(),
        scoring_strategy: services.search.scoring_strategy(),
        search: config.search.clone(),
        media: config.media.redacted(),
    };

    match format {
        OutputFormat::Human => {
            println!("Configuration:");
            println!("  data_dir: {}", response.data_dir);
            println!("  search:");
            println!("    default_page_size: {}", response.search.default_page_size);
            println!(
                "    max_page_size: {}",
                response
                    .search
                    .max_page_size
                    .map_or_else(|| "none".to_string(), |max| max.to_string())
            );
            println!("    max_query_length: {}", response.search.max_query_length);
            println!(
                "    scoring: {} (using {})",
                response.search.scoring, response.scoring_strategy
            );
            println!(
                "    similarity_threshold: {}",
                response.search.similarity_threshold
            );
            println!("  media:");
            println!(
                "    cloud_name: {}",
                response.media.cloud_name.as_deref().unwrap_or("-")
            );
            println!(
                "    api_key: {}",
                response.media.api_key.as_deref().unwrap_or("-")
            );
            println!(
                "    api_secret: {}",
                response.media.api_secret.as_deref().unwrap_or("-")
            );
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
