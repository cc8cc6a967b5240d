use regex::Regex;
use std::sync::LazyLock;
use url::Url;

/// Product-detail path pattern: a `/dp/` segment followed by a 10-character
/// alphanumeric product code. Case-insensitive; the code is captured.
static PRODUCT_PATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)/dp/([A-Z0-9]{10})").expect("product path pattern is valid"));

/// Returns true iff `url` points at a supported product detail page.
///
/// Pure predicate over the URL path; callers are expected to check it before
/// asking for extraction, though extraction itself stays fail-safe either way.
pub fn is_supported_product_page(url: &Url) -> bool {
    PRODUCT_PATH.is_match(url.path())
}

/// The 10-character product code embedded in a path-like string, uppercased,
/// or an empty string when the pattern is absent.
pub fn product_code_in(path: &str) -> String {
    PRODUCT_PATH
        .captures(path)
        .map(|captures| captures[1].to_uppercase())
        .unwrap_or_default()
}
