// Test fixtures for integration testing

use chrono::{DateTime, Duration, TimeZone, Utc};
use plotmarket::core::storage::{MarketData, MemoryStore};
use plotmarket::core::types::{Image, Listing, ListingStatus};

/// Reference time; fixture listings are created minutes after it
#[allow(dead_code)]
pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 4, 1, 8, 0, 0).unwrap()
}

/// Builder for a synthetic marketplace
#[derive(Default)]
pub struct MarketFixture {
    data: MarketData,
    next_image_id: i64,
}

#[allow(dead_code)] // Not every test binary uses every builder
impl MarketFixture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an OPEN listing created `minutes` after [`base_time`].
    ///
    /// Slugs are derived from the id (`L1`, `L2`, ...).
    pub fn listing(self, id: i64, title: &str, description: &str, minutes: i64) -> Self {
        self.listing_with_status(id, title, description, minutes, ListingStatus::Open)
    }

    pub fn listing_with_status(
        mut self,
        id: i64,
        title: &str,
        description: &str,
        minutes: i64,
        status: ListingStatus,
    ) -> Self {
        self.data.push_listing(Listing {
            id,
            slug: format!("L{id}"),
            title: title.to_string(),
            description: description.to_string(),
            created_at: base_time() + Duration::minutes(minutes),
            status,
            owner_id: Some(1),
        });
        self
    }

    /// Attach an image; image ids increase with each call
    pub fn image(self, listing_id: i64, reference: &str, primary: bool) -> Self {
        let id = self.next_image_id + 1;
        self.image_with_id(id, listing_id, reference, primary)
    }

    pub fn image_with_id(
        mut self,
        id: i64,
        listing_id: i64,
        reference: &str,
        primary: bool,
    ) -> Self {
        self.next_image_id = self.next_image_id.max(id);
        self.data.push_image(Image {
            id,
            listing_id,
            reference: reference.to_string(),
            primary,
        });
        self
    }

    /// Fifteen OPEN listings titled "Apfel 1" .. "Apfel 15", oldest first
    pub fn apples() -> Self {
        (1..=15).fold(Self::new(), |fixture, n| {
            fixture.listing(n, &format!("Apfel {n}"), "Aus eigenem Anbau", n)
        })
    }

    /// Umlaut and digraph spellings next to unrelated and non-OPEN listings
    pub fn gardens() -> Self {
        Self::new()
            .listing(1, "Gärten in Pankow", "Zwei Parzellen mit Laube", 1)
            .listing(2, "Gaerten am Stadtrand", "Schrebergarten abzugeben", 2)
            .listing(3, "Fahrrad", "Gebraucht, fährt gut", 3)
            .listing(4, "Kürbisse", "Hokkaido vom Beet", 4)
            .listing_with_status(
                5,
                "Gärten geschlossen",
                "Nicht mehr aktuell",
                5,
                ListingStatus::Closed,
            )
            .listing_with_status(
                6,
                "Gärten versteckt",
                "Vom Betreiber ausgeblendet",
                6,
                ListingStatus::Hidden,
            )
    }

    pub fn data(&self) -> MarketData {
        self.data.clone()
    }

    pub fn into_store(self) -> MemoryStore {
        MemoryStore::from_data(self.data)
    }
}
