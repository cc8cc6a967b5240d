use scraper::{Html, Selector};
use url::Url;

use crate::utils::clean_text;

/// A point-in-time snapshot of a rendered product page: the parsed element
/// tree plus the location it was captured from.
///
/// Snapshots are immutable; every extractor reads the same tree, so repeated
/// extraction over one snapshot is idempotent.
#[derive(Debug, Clone)]
pub struct PageSnapshot {
    document: Html,
    url: Url,
}

impl PageSnapshot {
    /// Parses page HTML captured from the given location.
    pub fn parse(html: &str, url: Url) -> Self {
        Self {
            document: Html::parse_document(html),
            url,
        }
    }

    /// The location this snapshot was captured from.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// The path component of the capture location.
    pub fn path(&self) -> &str {
        self.url.path()
    }

    /// Cleaned text content of the first element matching `selector`, or an
    /// empty string when nothing matches. A selector that fails to parse is
    /// treated as a miss rather than an error.
    pub fn first_text(&self, selector: &str) -> String {
        let Ok(selector) = Selector::parse(selector) else {
            return String::new();
        };
        self.document
            .select(&selector)
            .next()
            .map(|element| clean_text(&element.text().collect::<String>()))
            .unwrap_or_default()
    }

    /// Cleaned value of `attr` on the first element matching `selector`, or
    /// an empty string when the element or the attribute is absent.
    pub fn first_attr(&self, selector: &str, attr: &str) -> String {
        let Ok(selector) = Selector::parse(selector) else {
            return String::new();
        };
        self.document
            .select(&selector)
            .next()
            .and_then(|element| element.value().attr(attr))
            .map(clean_text)
            .unwrap_or_default()
    }

    /// Cleaned text of every element matching `selector`, in document order.
    /// Empty matches are kept; callers decide how to filter.
    pub fn all_texts(&self, selector: &str) -> Vec<String> {
        let Ok(selector) = Selector::parse(selector) else {
            return Vec::new();
        };
        self.document
            .select(&selector)
            .map(|element| clean_text(&element.text().collect::<String>()))
            .collect()
    }

    /// Cleaned value of `attr` on every element matching `selector`, in
    /// document order. Elements without the attribute are skipped.
    pub fn all_attrs(&self, selector: &str, attr: &str) -> Vec<String> {
        let Ok(selector) = Selector::parse(selector) else {
            return Vec::new();
        };
        self.document
            .select(&selector)
            .filter_map(|element| element.value().attr(attr))
            .map(clean_text)
            .collect()
    }

    /// Raw text content of every inline script block, in document order.
    pub fn script_texts(&self) -> Vec<String> {
        let selector = Selector::parse("script").expect("script selector is valid");
        self.document
            .select(&selector)
            .map(|element| element.text().collect::<String>())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(html: &str) -> PageSnapshot {
        PageSnapshot::parse(html, Url::parse("https://www.example.com/").unwrap())
    }

    #[test]
    fn test_first_text() {
        let page = snapshot("<div id='a'>  Hello \n world  </div><div id='a'>other</div>");
        assert_eq!(page.first_text("#a"), "Hello world");
        assert_eq!(page.first_text("#missing"), "");
    }

    #[test]
    fn test_first_attr() {
        let page = snapshot("<input id='code' value=' X1 '><a href='/p'>link</a>");
        assert_eq!(page.first_attr("#code", "value"), "X1");
        assert_eq!(page.first_attr("a", "href"), "/p");
        assert_eq!(page.first_attr("a", "title"), "");
        assert_eq!(page.first_attr("#missing", "value"), "");
    }

    #[test]
    fn test_invalid_selector_is_a_miss() {
        let page = snapshot("<div>content</div>");
        assert_eq!(page.first_text("div[["), "");
        assert_eq!(page.first_attr("div[[", "id"), "");
        assert!(page.all_texts("div[[").is_empty());
        assert!(page.all_attrs("div[[", "id").is_empty());
    }

    #[test]
    fn test_all_texts_keeps_document_order() {
        let page = snapshot("<li>one</li><li>two</li><li></li><li>one</li>");
        assert_eq!(page.all_texts("li"), vec!["one", "two", "", "one"]);
    }

    #[test]
    fn test_script_texts() {
        let page = snapshot("<script>var a = 1;</script><p>text</p><script>var b = 2;</script>");
        let scripts = page.script_texts();
        assert_eq!(scripts.len(), 2);
        assert!(scripts[0].contains("var a"));
        assert!(scripts[1].contains("var b"));
    }
}
