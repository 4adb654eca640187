// Cover selection tests through the search pipeline

use crate::common::{CountingImageStore, MarketFixture};
use plotmarket::core::config::Config;
use plotmarket::core::search::SearchService;
use plotmarket::core::types::SearchRequest;
use std::sync::Arc;

fn search_with_counting_images(fixture: MarketFixture) -> (SearchService, Arc<CountingImageStore>) {
    let store = Arc::new(fixture.into_store());
    let images = Arc::new(CountingImageStore::new(store.clone()));
    let search = SearchService::new(store, images.clone(), &Config::default().search);
    (search, images)
}

#[tokio::test]
async fn test_cover_rules() {
    let fixture = MarketFixture::new()
        .listing(1, "Salat primary", "", 1)
        .listing(2, "Salat fallback", "", 2)
        .listing(3, "Salat ohne Bild", "", 3)
        .image_with_id(10, 1, "img-a", false)
        .image_with_id(11, 1, "img-b", true)
        .image_with_id(20, 2, "img-late", false)
        .image_with_id(12, 2, "img-early", false);
    let (search, _) = search_with_counting_images(fixture);

    let response = search.search(SearchRequest::query("Salat")).await.unwrap();
    let by_id = |id: i64| response.items.iter().find(|i| i.id == id).unwrap();

    assert_eq!(by_id(1).cover_image.as_deref(), Some("img-b"));
    assert_eq!(by_id(1).image_count, 2);
    assert_eq!(by_id(2).cover_image.as_deref(), Some("img-early"));
    assert_eq!(by_id(2).image_count, 2);
    assert_eq!(by_id(3).cover_image, None);
    assert_eq!(by_id(3).image_count, 0);
}

#[tokio::test]
async fn test_several_primaries_lowest_id_wins() {
    let fixture = MarketFixture::new()
        .listing(1, "Zucchini", "", 1)
        .image_with_id(7, 1, "second", true)
        .image_with_id(4, 1, "first", true)
        .image_with_id(2, 1, "plain", false);
    let (search, _) = search_with_counting_images(fixture);

    let response = search.search(SearchRequest::default()).await.unwrap();
    assert_eq!(response.items[0].cover_image.as_deref(), Some("first"));
}

#[tokio::test]
async fn test_covers_fetched_once_for_page_only() {
    let fixture = (1..=15).fold(MarketFixture::apples(), |f, n| {
        f.image(n, &format!("apfel-{n}"), false)
    });
    let (search, images) = search_with_counting_images(fixture);

    let response = search
        .search(SearchRequest::query("Apfel").with_page(2, 10))
        .await
        .unwrap();

    assert_eq!(images.calls(), 1);
    let requested = images.requested();
    let mut ids = requested[0].clone();
    ids.sort_unstable();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    assert_eq!(response.items[0].cover_image.as_deref(), Some("apfel-5"));
}

#[tokio::test]
async fn test_empty_page_skips_image_lookup() {
    let (search, images) = search_with_counting_images(MarketFixture::apples());

    let response = search
        .search(SearchRequest::query("Birne"))
        .await
        .unwrap();

    assert!(response.items.is_empty());
    assert_eq!(images.calls(), 0);
}
