//! Product gallery extraction.
//!
//! Two sources exist because neither alone is reliable across layouts: the
//! thumbnail strip (authoritative for the record) and the inline gallery
//! scripts (a broader candidate pool kept for diagnostics only).

use regex::Regex;
use std::sync::LazyLock;

use crate::page::PageSnapshot;
use crate::utils::{clean_text, dedupe_non_empty};

/// Thumbnail strip images across the known layout variants.
const THUMBNAIL_IMAGES: &str = "ul[aria-label='Image thumbnails'] li img, #altImages li img";

/// Markers identifying inline scripts that carry the image gallery payload.
const GALLERY_SCRIPT_MARKERS: [&str; 2] = ["ImageBlockATF", "colorImages"];

/// Image-host URL as it appears inside script text (quotes, backslashes and
/// whitespace terminate a match).
static IMAGE_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"https://m\.media-amazon\.com/images/I/[^"'\\\s]+"#)
        .expect("image URL pattern is valid")
});

/// Size-variant segment in an image file name, e.g. `._SX300_` in
/// `photo._SX300_.jpg`.
static SIZE_VARIANT_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\._[^.]+_\.(jpg|jpeg|png|webp)$").expect("size variant pattern is valid")
});

/// The gallery pair: main image plus the full image list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductImages {
    /// First gallery entry, or empty when the gallery is empty
    pub main_image: String,
    /// All gallery URLs in thumbnail order, normalized and deduplicated
    pub all_product_images: Vec<String>,
}

/// Extracts the gallery from the thumbnail strip.
///
/// Thumbnail `src` URLs carry per-size variant suffixes; stripping them
/// collapses near-duplicate variants of one photo into a single canonical
/// URL. The first surviving entry is the main image.
pub fn product_images(page: &PageSnapshot) -> ProductImages {
    let urls = dedupe_non_empty(
        page.all_attrs(THUMBNAIL_IMAGES, "src")
            .into_iter()
            .map(|src| normalize_image_url(&src)),
    );
    ProductImages {
        main_image: urls.first().cloned().unwrap_or_default(),
        all_product_images: urls,
    }
}

/// Harvests image URLs from the inline gallery scripts.
///
/// Broader candidate pool than the thumbnail strip; the record's gallery
/// always comes from the thumbnails, this list is surfaced for diagnostics.
pub fn script_image_candidates(page: &PageSnapshot) -> Vec<String> {
    let mut urls = Vec::new();
    for text in page.script_texts() {
        if !GALLERY_SCRIPT_MARKERS.iter().any(|marker| text.contains(marker)) {
            continue;
        }
        for found in IMAGE_URL.find_iter(&text) {
            // Payloads escape ampersands as &
            urls.push(found.as_str().replace("\\u0026", "&"));
        }
    }
    dedupe_non_empty(urls)
}

/// Strips the size-variant segment from an image URL.
fn normalize_image_url(url: &str) -> String {
    SIZE_VARIANT_SUFFIX
        .replace(&clean_text(url), ".$1")
        .into_owned()
}
