//! One extractor per scalar product field.
//!
//! Each function is a pure read of the page snapshot with no failure path:
//! missing or unrecognized markup yields an empty value. Fields that have
//! appeared under several markup layouts try their candidate sources in
//! priority order and keep the first non-empty result.

use crate::filter;
use crate::page::PageSnapshot;
use crate::utils::{dedupe_non_empty, pick_first};

/// Catalog identifier: 10 uppercase alphanumeric characters, or empty.
///
/// Sources, in order: the page path, the `#ASIN` form field, a `data-asin`
/// attribute anywhere in the tree, and the canonical link's path.
pub fn identifier(page: &PageSnapshot) -> String {
    pick_first(&[
        &|| filter::product_code_in(page.path()),
        &|| page.first_attr("#ASIN", "value").to_uppercase(),
        &|| data_attribute_code(page),
        &|| filter::product_code_in(&page.first_attr("link[rel='canonical']", "href")),
    ])
}

/// `data-asin` carries the code on some layouts, but also decorates unrelated
/// widgets; only an exactly-10-character alphanumeric value is trusted.
fn data_attribute_code(page: &PageSnapshot) -> String {
    let code = page.first_attr("[data-asin]", "data-asin");
    if code.len() == 10 && code.chars().all(|c| c.is_ascii_alphanumeric()) {
        code.to_uppercase()
    } else {
        String::new()
    }
}

/// Product title.
pub fn title(page: &PageSnapshot) -> String {
    page.first_text("#productTitle")
}

/// Current display price, verbatim.
pub fn price(page: &PageSnapshot) -> String {
    first_text_of(
        page,
        &[
            ".a-price .a-offscreen",
            "#priceblock_ourprice",
            "#priceblock_dealprice",
        ],
    )
}

/// Pre-discount price, verbatim.
pub fn original_price(page: &PageSnapshot) -> String {
    first_text_of(
        page,
        &[
            "span.a-price.a-text-price span.a-offscreen",
            ".basisPrice .a-offscreen",
            "#priceblock_listprice",
            "#priceblock_wasprice",
        ],
    )
}

/// Long-form description, falling back to the bullet features joined with
/// single spaces when the description block is absent.
pub fn description(page: &PageSnapshot) -> String {
    let described = page.first_text("#productDescription");
    if !described.is_empty() {
        return described;
    }
    bullet_features(page).join(" ")
}

/// Feature bullets in document order, cleaned and deduplicated.
pub fn bullet_features(page: &PageSnapshot) -> Vec<String> {
    dedupe_non_empty(page.all_texts("#feature-bullets li span.a-list-item"))
}

/// Star rating text, from the rating popover title or the icon's
/// accessible text.
pub fn rating(page: &PageSnapshot) -> String {
    pick_first(&[
        &|| page.first_attr("#acrPopover", "title"),
        &|| page.first_text(".a-icon-alt"),
    ])
}

/// Review count text.
pub fn total_reviews(page: &PageSnapshot) -> String {
    page.first_text("#acrCustomerReviewText")
}

/// Brand or byline text.
pub fn brand(page: &PageSnapshot) -> String {
    page.first_text("#bylineInfo")
}

/// Availability text.
pub fn availability(page: &PageSnapshot) -> String {
    page.first_text("#availability")
}

/// Category breadcrumb trail in document order, cleaned, deduplicated, with
/// separator-only tokens dropped.
pub fn category_breadcrumbs(page: &PageSnapshot) -> Vec<String> {
    let tokens = page.all_texts(
        "#wayfinding-breadcrumbs_container li, \
         #wayfinding-breadcrumbs_container a, \
         #wayfinding-breadcrumbs_container span",
    );
    dedupe_non_empty(tokens.into_iter().filter(|token| token != "|"))
}

/// Ordered fallback over selector candidates: the first selector that yields
/// non-empty cleaned text wins.
fn first_text_of(page: &PageSnapshot, selectors: &[&str]) -> String {
    selectors
        .iter()
        .map(|selector| page.first_text(selector))
        .find(|value| !value.is_empty())
        .unwrap_or_default()
}
