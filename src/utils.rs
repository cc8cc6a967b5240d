use std::collections::HashSet;

/// Collapses any run of whitespace into a single space and trims the ends.
/// Empty or all-whitespace input yields an empty string.
pub fn clean_text(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Drops empty values and duplicates, preserving first-seen order.
pub fn dedupe_non_empty<I>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen = HashSet::new();
    let mut result = Vec::new();
    for value in values {
        if value.is_empty() {
            continue;
        }
        if seen.insert(value.clone()) {
            result.push(value);
        }
    }
    result
}

/// Evaluates candidate sources in priority order and returns the first
/// non-empty result, or an empty string when every candidate misses.
///
/// Candidates after the first hit are never evaluated.
pub fn pick_first(candidates: &[&dyn Fn() -> String]) -> String {
    for candidate in candidates {
        let value = candidate();
        if !value.is_empty() {
            return value;
        }
    }
    String::new()
}
