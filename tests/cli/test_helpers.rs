//! CLI test helpers
//!
//! Arc<Services> wrappers matching CLI execute() signatures

use crate::common::MarketFixture;
use plotmarket::core::config::Config;
use plotmarket::core::services::Services;
use plotmarket::core::types::NewListing;
use std::sync::Arc;
use tempfile::TempDir;

/// Services over a JSON snapshot in a temp dir (keep the dir alive)
pub fn create_cli_test_services() -> (Arc<Services>, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let mut config = Config::default();
    config.storage.data_dir = temp_dir.path().to_path_buf();

    (Arc::new(Services::new(config)), temp_dir)
}

/// In-memory services seeded with the garden fixture
pub fn create_garden_services() -> Arc<Services> {
    let store = Arc::new(MarketFixture::gardens().into_store());
    Arc::new(Services::with_stores(Config::default(), store.clone(), store))
}

/// Post a listing and return its slug
pub async fn post_listing(services: &Arc<Services>, title: &str, images: &[&str]) -> String {
    services
        .listings
        .post_listing(NewListing {
            title: title.to_string(),
            description: "Aus dem Kleingarten".to_string(),
            image_refs: images.iter().map(|s| s.to_string()).collect(),
            owner_id: None,
        })
        .await
        .expect("Failed to post listing")
        .listing
        .slug
}
