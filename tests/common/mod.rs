// Common test utilities and fixtures

pub mod fixtures;
pub mod helpers;

// Re-export commonly used items
// Note: These may appear unused in some test binaries
#[allow(unused_imports)]
pub use fixtures::{base_time, MarketFixture};
#[allow(unused_imports)]
pub use helpers::{
    create_json_services, create_test_services, result_titles, CountingImageStore, FailingStore,
};
