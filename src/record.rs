use serde::{Deserialize, Serialize};

/// One immutable snapshot of the product data found on a detail page.
///
/// Every text field is whitespace-normalized or exactly empty (absence of
/// data is an empty value, never an error), sequence fields carry no empty
/// or duplicate entries, and a non-empty `main_image` is always the first
/// entry of `all_product_images`. A record is created once per scrape and
/// handed off; nothing updates it in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    /// 10-character uppercase alphanumeric catalog code, or empty
    pub identifier: String,

    /// Product title
    pub title: String,

    /// Current display price, verbatim (no currency parsing)
    pub price: String,

    /// Pre-discount price, if the page shows one
    pub original_price: String,

    /// Long description; falls back to the bullet features joined together
    pub description: String,

    /// Feature bullets in document order
    pub bullet_features: Vec<String>,

    /// First gallery image URL, or empty when the gallery is empty
    pub main_image: String,

    /// All gallery image URLs, normalized and deduplicated
    pub all_product_images: Vec<String>,

    /// Rating text as shown, e.g. "4.5 out of 5 stars"
    pub rating: String,

    /// Review count text as shown
    pub total_reviews: String,

    /// Brand or byline text
    pub brand: String,

    /// Availability text
    pub availability: String,

    /// Category breadcrumb trail, separators excluded
    pub category_breadcrumbs: Vec<String>,

    /// Absolute URL of the page the record was captured from
    pub source_url: String,

    /// Capture instant, RFC 3339 / ISO-8601
    pub captured_at: String,
}
