//! The request/response boundary between the control surface and the page.
//!
//! One typed request maps to exactly one typed response; there is no retry,
//! no cancellation, and no overlapping requests.

use serde::{Deserialize, Serialize};

use crate::extractors;
use crate::filter;
use crate::page::PageSnapshot;
use crate::record::ProductRecord;

/// Fixed answer for scrape attempts against anything that is not a product
/// detail page.
pub const UNSUPPORTED_PAGE_ERROR: &str = "This is not a supported product page (/dp/<id>).";

/// Request accepted from the control surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ScrapeRequest {
    /// Extract the product record from the current page
    #[serde(rename = "SCRAPE_PRODUCT")]
    ScrapeProduct,
}

/// Response returned to the control surface: the record on success, a short
/// human-readable message otherwise.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapeResponse {
    pub ok: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<ProductRecord>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ScrapeResponse {
    /// A successful response carrying the extracted record.
    pub fn success(record: ProductRecord) -> Self {
        Self {
            ok: true,
            data: Some(record),
            error: None,
        }
    }

    /// A failed response carrying a human-readable message.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Serves one scrape request against the captured page.
///
/// The page-applicability guard runs before extraction; an unsupported page
/// is answered with the fixed message and extraction never starts.
pub fn handle_request(request: &ScrapeRequest, page: &PageSnapshot) -> ScrapeResponse {
    match request {
        ScrapeRequest::ScrapeProduct => scrape_product(page),
    }
}

fn scrape_product(page: &PageSnapshot) -> ScrapeResponse {
    if !filter::is_supported_product_page(page.url()) {
        ::log::info!("refusing to scrape unsupported page: {}", page.url());
        return ScrapeResponse::failure(UNSUPPORTED_PAGE_ERROR);
    }
    ScrapeResponse::success(extractors::extract_product_record(page))
}
