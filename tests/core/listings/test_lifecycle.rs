// Listing lifecycle tests: post, detail, status

use crate::common::{create_test_services, FailingStore, MarketFixture};
use plotmarket::core::config::ScoringMode;
use plotmarket::core::listings::{is_valid_slug, ListingService};
use plotmarket::core::storage::MemoryStore;
use plotmarket::core::types::{ListingStatus, NewListing, SearchRequest};
use plotmarket::MarketError;
use std::sync::Arc;

fn new_listing(title: &str, description: &str, images: &[&str]) -> NewListing {
    NewListing {
        title: title.to_string(),
        description: description.to_string(),
        image_refs: images.iter().map(|s| s.to_string()).collect(),
        owner_id: None,
    }
}

#[tokio::test]
async fn test_post_then_detail_lists_cover_first() {
    let services = create_test_services(MemoryStore::new(), ScoringMode::Auto);

    let posted = services
        .listings
        .post_listing(new_listing("  Himbeeren  ", "Sommerernte", &["a", "b", "c"]))
        .await
        .unwrap();
    assert_eq!(posted.images.len(), 3);
    let posted = posted.listing;

    assert!(is_valid_slug(&posted.slug));
    assert_eq!(posted.title, "Himbeeren");
    assert_eq!(posted.status, ListingStatus::Open);

    let detail = services
        .listings
        .listing_detail(&posted.slug)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(detail.images, vec!["a", "b", "c"]);
    assert_eq!(detail.title, "Himbeeren");
}

#[tokio::test]
async fn test_invalid_listing_reports_every_field() {
    let services = create_test_services(MemoryStore::new(), ScoringMode::Auto);
    let long_title = "x".repeat(51);
    let images = ["1", "2", "3", "4", "5", "6"];

    let err = services
        .listings
        .post_listing(new_listing(&long_title, "   ", &images))
        .await
        .unwrap_err();

    assert!(err.is_bad_request());
    match err {
        MarketError::InvalidListing { field_errors } => {
            assert_eq!(field_errors.title.as_deref(), Some("Maximal 50 Zeichen"));
            assert_eq!(
                field_errors.description.as_deref(),
                Some("Beschreibung ist erforderlich")
            );
            assert_eq!(
                field_errors.images.as_deref(),
                Some("Maximal 5 Bilder erlaubt")
            );
        }
        other => panic!("unexpected error: {other:?}"),
    }

    // Nothing stored
    let response = services.search.search(SearchRequest::default()).await.unwrap();
    assert_eq!(response.total, 0);
}

#[tokio::test]
async fn test_detail_includes_non_open_listings() {
    let services = create_test_services(MarketFixture::gardens().into_store(), ScoringMode::Auto);

    let detail = services.listings.listing_detail("L5").await.unwrap().unwrap();
    assert_eq!(detail.status, ListingStatus::Closed);
}

#[tokio::test]
async fn test_unknown_or_malformed_slug_has_no_detail() {
    let services = create_test_services(MarketFixture::gardens().into_store(), ScoringMode::Auto);

    assert!(services.listings.listing_detail("nope").await.unwrap().is_none());
    assert!(services
        .listings
        .listing_detail("../etc/passwd")
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_hidden_listing_can_be_reopened() {
    let services = create_test_services(MarketFixture::gardens().into_store(), ScoringMode::Auto);

    services
        .listings
        .set_status("L6", ListingStatus::Open)
        .await
        .unwrap();

    let response = services
        .search
        .search(SearchRequest::query("versteckt"))
        .await
        .unwrap();
    assert_eq!(response.items[0].slug, "L6");
}

#[tokio::test]
async fn test_set_status_unknown_slug_is_not_found() {
    let services = create_test_services(MemoryStore::new(), ScoringMode::Auto);

    let err = services
        .listings
        .set_status("Zz9", ListingStatus::Closed)
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_store_failure_propagates_from_posting() {
    let store = Arc::new(FailingStore);
    let service = ListingService::new(store.clone(), store);

    let err = service
        .post_listing(new_listing("Bohnen", "Stangenbohnen", &[]))
        .await
        .unwrap_err();
    assert!(err.is_data_access());
}
