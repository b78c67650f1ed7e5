//! Integration tests for inline style parsing and large-text classification.

use adacheck_rules::{StyleMap, is_large_text, parse_inline_style};

fn style(text: &str) -> StyleMap {
    parse_inline_style(text)
}

#[test]
fn test_parse_declarations() {
    let map = style("color: #777; Background-Color : white ;");
    assert_eq!(map.len(), 2);
    assert_eq!(map.get("color").map(String::as_str), Some("#777"));
    assert_eq!(map.get("background-color").map(String::as_str), Some("white"));
}

#[test]
fn test_value_splits_on_first_colon_only() {
    let map = style("background: url(http://x/y.png) #fff");
    assert_eq!(
        map.get("background").map(String::as_str),
        Some("url(http://x/y.png) #fff")
    );
}

#[test]
fn test_malformed_declarations_are_skipped() {
    let map = style("color red; ; font-size:18px");
    assert_eq!(map.len(), 1);
    assert!(map.contains_key("font-size"));
}

#[test]
fn test_empty_input_is_empty_map() {
    assert!(style("").is_empty());
    assert!(style("  ;  ").is_empty());
}

#[test]
fn test_last_duplicate_wins() {
    let map = style("color:red;color:blue");
    assert_eq!(map.get("color").map(String::as_str), Some("blue"));
}

#[test]
fn test_large_text_by_size() {
    assert!(is_large_text(&style("font-size:18px")));
    assert!(is_large_text(&style("font-size: 24")));
    assert!(!is_large_text(&style("font-size:17.9px")));
}

#[test]
fn test_large_text_by_bold_size() {
    assert!(is_large_text(&style("font-size:14px;font-weight:bold")));
    assert!(is_large_text(&style("font-size:14px;font-weight:700")));
    assert!(!is_large_text(&style("font-size:14px;font-weight:600")));
    assert!(!is_large_text(&style("font-size:13px;font-weight:bold")));
}

#[test]
fn test_unparseable_font_size_is_not_large() {
    assert!(!is_large_text(&style("font-size:2em;font-weight:bold")));
    assert!(!is_large_text(&style("font-weight:900")));
    assert!(!is_large_text(&StyleMap::new()));
}
