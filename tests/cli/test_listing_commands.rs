//! Tests for the post, show and set-status CLI commands

use crate::cli::test_helpers::{create_cli_test_services, create_garden_services, post_listing};
use plotmarket::cli::commands::{post, show, status};
use plotmarket::cli::OutputFormat;
use plotmarket::core::types::{ListingStatus, NewListing, SearchRequest};

#[tokio::test]
async fn test_post_stores_listing() {
    let (services, _temp) = create_cli_test_services();

    let args = post::PostArgs {
        title: "Rhabarber".to_string(),
        description: "Frisch gestochen".to_string(),
        images: vec!["rhabarber-1".to_string()],
        owner: Some(3),
    };
    let result = post::execute(args, &services, OutputFormat::Json).await;
    assert!(result.is_ok(), "Post should succeed: {:?}", result.err());

    let response = services
        .search
        .search(SearchRequest::query("Rhabarber"))
        .await
        .unwrap();
    assert_eq!(response.total, 1);
    assert_eq!(response.items[0].cover_image.as_deref(), Some("rhabarber-1"));
}

#[tokio::test]
async fn test_post_counts_only_stored_images() {
    let (services, _temp) = create_cli_test_services();

    let args = post::PostArgs {
        title: "Mangold".to_string(),
        description: "Bunte Stiele".to_string(),
        images: vec![String::new(), "mangold-1".to_string(), "  ".to_string()],
        owner: None,
    };
    let result = post::execute(args, &services, OutputFormat::Json).await;
    assert!(result.is_ok(), "Post should succeed: {:?}", result.err());

    let response = services
        .search
        .search(SearchRequest::query("Mangold"))
        .await
        .unwrap();
    assert_eq!(response.items[0].image_count, 1);
    assert_eq!(response.items[0].cover_image.as_deref(), Some("mangold-1"));

    let stored = services
        .listings
        .post_listing(NewListing {
            title: "Mangold rot".to_string(),
            description: "Zweite Ernte".to_string(),
            image_refs: vec![String::new(), "rot-1".to_string()],
            owner_id: None,
        })
        .await
        .unwrap();
    assert_eq!(post::PostResponse::new(&stored).images, 1);
}

#[tokio::test]
async fn test_post_rejects_invalid_listing() {
    let (services, _temp) = create_cli_test_services();

    for format in [OutputFormat::Human, OutputFormat::Json] {
        let args = post::PostArgs {
            title: String::new(),
            description: "ohne Titel".to_string(),
            images: vec![],
            owner: None,
        };
        let result = post::execute(args, &services, format).await;
        let err = result.unwrap_err();
        assert!(err.to_string().contains("title"));
    }
}

#[tokio::test]
async fn test_show_existing_listing() {
    let (services, _temp) = create_cli_test_services();
    let slug = post_listing(&services, "Quitten", &["q1", "q2"]).await;

    for format in [OutputFormat::Human, OutputFormat::Json] {
        let args = show::ShowArgs { slug: slug.clone() };
        let result = show::execute(args, &services, format).await;
        assert!(result.is_ok(), "Show should succeed: {:?}", result.err());
    }
}

#[tokio::test]
async fn test_show_unknown_listing_fails() {
    let services = create_garden_services();

    let args = show::ShowArgs {
        slug: "missing1".to_string(),
    };
    let err = show::execute(args, &services, OutputFormat::Human)
        .await
        .unwrap_err();
    assert!(err.to_string().contains("missing1"));
}

#[tokio::test]
async fn test_set_status_hides_from_search() {
    let services = create_garden_services();

    let args = status::StatusArgs {
        slug: "L1".to_string(),
        status: ListingStatus::Hidden,
    };
    let result = status::execute(args, &services, OutputFormat::Human).await;
    assert!(result.is_ok());

    let response = services
        .search
        .search(SearchRequest::query("Pankow"))
        .await
        .unwrap();
    assert_eq!(response.total, 0);
}

#[tokio::test]
async fn test_set_status_unknown_slug_fails() {
    let services = create_garden_services();

    let args = status::StatusArgs {
        slug: "L99".to_string(),
        status: ListingStatus::Closed,
    };
    let result = status::execute(args, &services, OutputFormat::Json).await;
    assert!(result.is_err());
}
