use crate::page::PageSnapshot;
use url::Url;

mod field_extractor_tests;

/// Canonical product-page URL used across fixtures.
pub const PRODUCT_URL: &str = "https://www.amazon.com/Widget-Pro/dp/B0DEMO1234/ref=sr_1_1";

/// Builds a snapshot from fixture HTML captured at `url`.
pub fn snapshot(html: &str, url: &str) -> PageSnapshot {
    PageSnapshot::parse(html, Url::parse(url).unwrap())
}
