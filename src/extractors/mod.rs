//! Field extractors and the record assembler.
//!
//! Every extractor is an independent, infallible read of one page snapshot;
//! absent data shows up as an empty value. The assembler composes them into
//! the final record.

pub mod fields;
pub mod images;

#[cfg(test)]
mod tests;

pub use images::ProductImages;

use chrono::Utc;

use crate::page::PageSnapshot;
use crate::record::ProductRecord;

/// Assembles the full product record from one page snapshot.
///
/// The gallery pair is computed once so a non-empty main image is always the
/// head of the image list. Extractors cannot fail, so neither can assembly;
/// a page with none of the expected markup yields a record of empty fields.
pub fn extract_product_record(page: &PageSnapshot) -> ProductRecord {
    let images = images::product_images(page);

    let script_pool = images::script_image_candidates(page);
    ::log::debug!(
        "gallery: {} thumbnail URLs, {} script candidates",
        images.all_product_images.len(),
        script_pool.len()
    );

    let record = ProductRecord {
        identifier: fields::identifier(page),
        title: fields::title(page),
        price: fields::price(page),
        original_price: fields::original_price(page),
        description: fields::description(page),
        bullet_features: fields::bullet_features(page),
        main_image: images.main_image,
        all_product_images: images.all_product_images,
        rating: fields::rating(page),
        total_reviews: fields::total_reviews(page),
        brand: fields::brand(page),
        availability: fields::availability(page),
        category_breadcrumbs: fields::category_breadcrumbs(page),
        source_url: page.url().to_string(),
        captured_at: Utc::now().to_rfc3339(),
    };

    ::log::debug!(
        "extracted record for {}: identifier={:?}, {} bullets, {} breadcrumbs",
        record.source_url,
        record.identifier,
        record.bullet_features.len(),
        record.category_breadcrumbs.len()
    );

    record
}
