//! Display model for the control surface.
//!
//! Each field is rendered as one labeled entry whose shape is chosen
//! explicitly per field: a single copyable text, or a list of individually
//! copyable items (used for the image gallery).

use crate::record::ProductRecord;

/// The value shape of one display entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayValue {
    /// One copyable text value
    Text(String),
    /// A list of individually copyable items
    Items(Vec<String>),
}

/// One labeled row of the control surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayEntry {
    pub label: String,
    pub value: DisplayValue,
}

impl DisplayEntry {
    fn text(name: &str, value: &str) -> Self {
        Self {
            label: format_label(name),
            value: DisplayValue::Text(value.to_string()),
        }
    }

    fn items(name: &str, values: &[String]) -> Self {
        Self {
            label: format_label(name),
            value: DisplayValue::Items(values.to_vec()),
        }
    }
}

/// Labeled entries for one record, in record field order.
///
/// Bullet features are deliberately left off the surface. The image gallery
/// renders as a list of individually copyable URLs; every other field is a
/// single text entry (the breadcrumb trail joined with commas).
pub fn entries(record: &ProductRecord) -> Vec<DisplayEntry> {
    vec![
        DisplayEntry::text("identifier", &record.identifier),
        DisplayEntry::text("title", &record.title),
        DisplayEntry::text("price", &record.price),
        DisplayEntry::text("originalPrice", &record.original_price),
        DisplayEntry::text("description", &record.description),
        DisplayEntry::text("mainImage", &record.main_image),
        DisplayEntry::items("allProductImages", &record.all_product_images),
        DisplayEntry::text("rating", &record.rating),
        DisplayEntry::text("totalReviews", &record.total_reviews),
        DisplayEntry::text("brand", &record.brand),
        DisplayEntry::text("availability", &record.availability),
        DisplayEntry::text("categoryBreadcrumbs", &record.category_breadcrumbs.join(", ")),
        DisplayEntry::text("sourceUrl", &record.source_url),
        DisplayEntry::text("capturedAt", &record.captured_at),
    ]
}

/// Derives a human label from a wire field name: a space goes before each
/// capital that follows a lowercase letter, and the first letter is
/// capitalized.
pub fn format_label(name: &str) -> String {
    let mut label = String::with_capacity(name.len() + 4);
    let mut prev_lower = false;
    for ch in name.chars() {
        if label.is_empty() {
            label.extend(ch.to_uppercase());
        } else {
            if prev_lower && ch.is_uppercase() {
                label.push(' ');
            }
            label.push(ch);
        }
        prev_lower = ch.is_lowercase();
    }
    label
}
