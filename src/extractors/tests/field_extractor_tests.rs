use super::{PRODUCT_URL, snapshot};
use crate::extractors::fields;

#[test]
fn test_identifier_from_path() {
    let page = snapshot("<html></html>", PRODUCT_URL);
    assert_eq!(fields::identifier(&page), "B0DEMO1234");

    // Lowercase path codes are normalized
    let page = snapshot("<html></html>", "https://www.amazon.com/dp/b0demo1234");
    assert_eq!(fields::identifier(&page), "B0DEMO1234");
}

#[test]
fn test_identifier_from_form_field() {
    // No code in the path: the hidden form field is next in line
    let page = snapshot(
        "<input id='ASIN' type='hidden' value='b1aaaa2222'>",
        "https://www.amazon.com/gp/product/ref=nav",
    );
    assert_eq!(fields::identifier(&page), "B1AAAA2222");
}

#[test]
fn test_identifier_from_data_attribute() {
    let page = snapshot(
        "<div data-asin='b2bbbb3333'>widget card</div>",
        "https://www.amazon.com/gp/product/ref=nav",
    );
    assert_eq!(fields::identifier(&page), "B2BBBB3333");
}

#[test]
fn test_identifier_rejects_malformed_data_attribute() {
    // Too short, and not alphanumeric: both fall through to the canonical link
    for bad in ["short", "has spaces!", "B3CCCC44445"] {
        let html = format!(
            "<div data-asin='{bad}'></div>\
             <link rel='canonical' href='https://www.amazon.com/widget/dp/B3CCCC4444'>"
        );
        let page = snapshot(&html, "https://www.amazon.com/gp/product/ref=nav");
        assert_eq!(fields::identifier(&page), "B3CCCC4444", "data-asin={bad:?}");
    }
}

#[test]
fn test_identifier_absent() {
    let page = snapshot("<html><body></body></html>", "https://www.example.com/");
    assert_eq!(fields::identifier(&page), "");
}

#[test]
fn test_title() {
    let page = snapshot(
        "<span id='productTitle'>  Widget Pro   3000 </span>",
        PRODUCT_URL,
    );
    assert_eq!(fields::title(&page), "Widget Pro 3000");

    let page = snapshot("<html></html>", PRODUCT_URL);
    assert_eq!(fields::title(&page), "");
}

#[test]
fn test_price_prefers_current_layout() {
    let html = "\
        <span class='a-price'><span class='a-offscreen'>$24.99</span></span>\
        <span id='priceblock_ourprice'>$99.99</span>";
    let page = snapshot(html, PRODUCT_URL);
    assert_eq!(fields::price(&page), "$24.99");
}

#[test]
fn test_price_falls_back_to_legacy_blocks() {
    let page = snapshot("<span id='priceblock_ourprice'>$19.99</span>", PRODUCT_URL);
    assert_eq!(fields::price(&page), "$19.99");

    let page = snapshot("<span id='priceblock_dealprice'>$14.99</span>", PRODUCT_URL);
    assert_eq!(fields::price(&page), "$14.99");

    let page = snapshot("<html></html>", PRODUCT_URL);
    assert_eq!(fields::price(&page), "");
}

#[test]
fn test_original_price_candidates() {
    let html = "\
        <span class='a-price a-text-price'><span class='a-offscreen'>$39.99</span></span>";
    let page = snapshot(html, PRODUCT_URL);
    assert_eq!(fields::original_price(&page), "$39.99");

    let page = snapshot("<span id='priceblock_listprice'>$49.99</span>", PRODUCT_URL);
    assert_eq!(fields::original_price(&page), "$49.99");

    let page = snapshot("<div class='basisPrice'><span class='a-offscreen'>$59.99</span></div>", PRODUCT_URL);
    assert_eq!(fields::original_price(&page), "$59.99");

    let page = snapshot("<html></html>", PRODUCT_URL);
    assert_eq!(fields::original_price(&page), "");
}

#[test]
fn test_description_block_wins() {
    let html = "\
        <div id='productDescription'><p>A  durable   widget.</p></div>\
        <div id='feature-bullets'><ul>\
          <li><span class='a-list-item'>Bullet one</span></li>\
        </ul></div>";
    let page = snapshot(html, PRODUCT_URL);
    assert_eq!(fields::description(&page), "A durable widget.");
}

#[test]
fn test_description_falls_back_to_bullets() {
    let html = "\
        <div id='feature-bullets'><ul>\
          <li><span class='a-list-item'>Durable steel body</span></li>\
          <li><span class='a-list-item'>Durable steel body</span></li>\
          <li><span class='a-list-item'>Two-year warranty</span></li>\
        </ul></div>";
    let page = snapshot(html, PRODUCT_URL);
    assert_eq!(
        fields::description(&page),
        "Durable steel body Two-year warranty"
    );
}

#[test]
fn test_description_empty_without_sources() {
    let page = snapshot("<html><body><p>unrelated</p></body></html>", PRODUCT_URL);
    assert_eq!(fields::description(&page), "");
}

#[test]
fn test_bullet_features_cleaned_and_deduplicated() {
    let html = "\
        <div id='feature-bullets'><ul>\
          <li><span class='a-list-item'>  Durable   steel body </span></li>\
          <li><span class='a-list-item'>Durable steel body</span></li>\
          <li><span class='a-list-item'>   </span></li>\
          <li><span class='a-list-item'>Two-year warranty</span></li>\
        </ul></div>";
    let page = snapshot(html, PRODUCT_URL);
    assert_eq!(
        fields::bullet_features(&page),
        vec!["Durable steel body", "Two-year warranty"]
    );

    let page = snapshot("<html></html>", PRODUCT_URL);
    assert!(fields::bullet_features(&page).is_empty());
}

#[test]
fn test_rating_prefers_popover_title() {
    let html = "\
        <span id='acrPopover' title='4.5 out of 5 stars'>\
          <i class='a-icon-star'><span class='a-icon-alt'>4.5 out of 5 stars</span></i>\
        </span>";
    let page = snapshot(html, PRODUCT_URL);
    assert_eq!(fields::rating(&page), "4.5 out of 5 stars");
}

#[test]
fn test_rating_falls_back_to_icon_text() {
    let html = "<i class='a-icon-star'><span class='a-icon-alt'>3.8 out of 5 stars</span></i>";
    let page = snapshot(html, PRODUCT_URL);
    assert_eq!(fields::rating(&page), "3.8 out of 5 stars");

    let page = snapshot("<html></html>", PRODUCT_URL);
    assert_eq!(fields::rating(&page), "");
}

#[test]
fn test_single_selector_fields() {
    let html = "\
        <span id='acrCustomerReviewText'>1,234 ratings</span>\
        <a id='bylineInfo'>Visit the WidgetCo Store</a>\
        <div id='availability'><span> In   Stock </span></div>";
    let page = snapshot(html, PRODUCT_URL);
    assert_eq!(fields::total_reviews(&page), "1,234 ratings");
    assert_eq!(fields::brand(&page), "Visit the WidgetCo Store");
    assert_eq!(fields::availability(&page), "In Stock");
}

#[test]
fn test_category_breadcrumbs_drop_separators() {
    let html = "\
        <div id='wayfinding-breadcrumbs_container'><ul>\
          <li><a>Tools</a></li>\
          <li class='a-breadcrumb-divider'>|</li>\
          <li><a>Widgets</a></li>\
          <li class='a-breadcrumb-divider'>|</li>\
          <li><span>Heavy-Duty Widgets</span></li>\
        </ul></div>";
    let page = snapshot(html, PRODUCT_URL);
    assert_eq!(
        fields::category_breadcrumbs(&page),
        vec!["Tools", "Widgets", "Heavy-Duty Widgets"]
    );
}

#[test]
fn test_category_breadcrumbs_absent_container() {
    let page = snapshot("<ul><li>Tools</li></ul>", PRODUCT_URL);
    assert!(fields::category_breadcrumbs(&page).is_empty());
}
