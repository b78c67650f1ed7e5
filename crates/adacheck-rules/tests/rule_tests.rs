//! Integration tests for the individual rules and the engine.

use adacheck_dom::{Attributes, DomTree, NodeId};
use adacheck_html::parse_document;
use adacheck_rules::rules::contrast::{check_contrast, colors_from_chain};
use adacheck_rules::rules::doc::{check_doc_lang, check_doc_title};
use adacheck_rules::rules::headings::check_headings;
use adacheck_rules::rules::images::check_images;
use adacheck_rules::rules::links::check_links;
use adacheck_rules::{Finding, Rgb, RuleEngine, RuleId, run_rules};

/// Helper to parse HTML into a tree.
fn parse(html: &str) -> DomTree {
    parse_document(html).expect("valid input").dom
}

/// Helper to collect the rule ids of a finding list.
fn ids(findings: &[Finding]) -> Vec<RuleId> {
    findings.iter().map(|f| f.rule_id).collect()
}

fn count(findings: &[Finding], rule_id: RuleId) -> usize {
    findings.iter().filter(|f| f.rule_id == rule_id).count()
}

// ========== document ==========

#[test]
fn test_doc_lang_present() {
    let tree = parse(r#"<html lang="en"><head><title>T</title></head></html>"#);
    assert!(check_doc_lang(&tree).is_empty());
}

#[test]
fn test_doc_lang_missing_or_blank() {
    for html in ["<html><body>x</body></html>", r#"<html lang="  "><body>x</body></html>"#] {
        let findings = check_doc_lang(&parse(html));
        assert_eq!(ids(&findings), vec![RuleId::DocLangMissing], "{html}");
        assert_eq!(findings[0].selector, "html");
        assert_eq!(findings[0].code_snippet, "<html ...>");
    }
}

#[test]
fn test_doc_lang_without_html_element() {
    let findings = check_doc_lang(&DomTree::new());
    assert_eq!(ids(&findings), vec![RuleId::DocLangMissing]);
}

#[test]
fn test_doc_title_missing_and_blank() {
    assert_eq!(
        ids(&check_doc_title(&parse("<p>x</p>"))),
        vec![RuleId::DocTitleMissing]
    );
    let blank = check_doc_title(&parse("<title>  </title><p>x</p>"));
    assert_eq!(ids(&blank), vec![RuleId::DocTitleMissing]);
    assert_eq!(blank[0].selector, "html > head > title:nth-of-type(1)");
    assert!(check_doc_title(&parse("<title>Home</title>")).is_empty());
}

// ========== images ==========

#[test]
fn test_img_without_alt_as_sole_element() {
    let mut tree = DomTree::new();
    let _ = tree.append_element(NodeId::ROOT, "img", [("src", "x.jpg")].into_iter().collect());

    let findings = check_images(&tree);
    assert_eq!(ids(&findings), vec![RuleId::ImgAltMissing]);
    assert_eq!(findings[0].selector, "img");
    assert_eq!(findings[0].element, "img");
    assert_eq!(findings[0].code_snippet, r#"<img src="x.jpg"/>"#);
}

#[test]
fn test_img_blank_alt_is_missing() {
    let findings = check_images(&parse(r#"<img src="a.png" alt="   ">"#));
    assert_eq!(ids(&findings), vec![RuleId::ImgAltMissing]);
}

#[test]
fn test_img_alt_length_limit() {
    let at_limit = format!(r#"<img alt="{}">"#, "a".repeat(120));
    assert!(check_images(&parse(&at_limit)).is_empty());

    let over = format!(r#"<img alt="{}">"#, "a".repeat(121));
    let findings = check_images(&parse(&over));
    assert_eq!(ids(&findings), vec![RuleId::ImgAltLength]);
    assert_eq!(findings[0].message, "Alt text should not exceed 120 characters.");
}

#[test]
fn test_img_findings_in_document_order() {
    let tree = parse(r#"<img src="1"><div><img src="2" alt="ok"><img src="3"></div>"#);
    let findings = check_images(&tree);
    assert_eq!(findings.len(), 2);
    assert!(findings[0].code_snippet.contains(r#"src="1""#));
    assert!(findings[1].code_snippet.contains(r#"src="3""#));
}

#[test]
fn test_img_snippet_keeps_source_attribute_order() {
    let findings = check_images(&parse(r#"<img src="x.jpg" alt="">"#));
    assert_eq!(ids(&findings), vec![RuleId::ImgAltMissing]);
    assert_eq!(findings[0].code_snippet, r#"<img src="x.jpg" alt=""/>"#);
}

// ========== links ==========

#[test]
fn test_generic_link_text_is_case_insensitive() {
    let findings = check_links(&parse(r##"<a href="#">Click Here</a>"##));
    assert_eq!(ids(&findings), vec![RuleId::LinkGenericText]);
    assert_eq!(findings[0].element, "a");
}

#[test]
fn test_generic_link_text_uses_nested_text_and_trims() {
    let findings = check_links(&parse(r#"<a href="/x">  <span>Read</span> more </a>"#));
    assert_eq!(ids(&findings), vec![RuleId::LinkGenericText]);
}

#[test]
fn test_link_snippet_keeps_source_attribute_order() {
    let findings = check_links(&parse(
        r##"<a id="go" href="#top" class="btn primary" data-track="hero">Learn more</a>"##,
    ));
    assert_eq!(ids(&findings), vec![RuleId::LinkGenericText]);
    assert_eq!(
        findings[0].code_snippet,
        r##"<a id="go" href="#top" class="btn primary" data-track="hero">Learn more</a>"##
    );
}

#[test]
fn test_descriptive_links_pass() {
    let tree = parse(
        r#"<a href="/p">View pricing</a><a href="/m">more details</a><a href="/e"></a>"#,
    );
    assert!(check_links(&tree).is_empty());
}

// ========== headings ==========

#[test]
fn test_heading_skip_is_reported() {
    let findings = check_headings(&parse("<h1>T</h1><h3>S</h3>"));
    assert_eq!(ids(&findings), vec![RuleId::HeadingOrder]);
    assert_eq!(findings[0].message, "Heading level skipped: found <h3> after <h1>.");
    assert_eq!(findings[0].element, "h3");
    assert_eq!(findings[0].selector, "html > body:nth-of-type(1) > h3:nth-of-type(1)");
}

#[test]
fn test_heading_going_up_is_not_a_skip() {
    let findings = check_headings(&parse("<h1>T</h1><h2>S</h2><h1>U</h1>"));
    assert_eq!(count(&findings, RuleId::HeadingOrder), 0);
    assert_eq!(count(&findings, RuleId::HeadingMultipleH1), 1);
}

#[test]
fn test_heading_skip_resets_baseline() {
    let findings = check_headings(&parse("<h1>A</h1><h4>B</h4><h4>C</h4><h5>D</h5>"));
    assert_eq!(count(&findings, RuleId::HeadingOrder), 1);
}

#[test]
fn test_first_heading_may_start_deep() {
    assert!(check_headings(&parse("<h3>A</h3><h4>B</h4>")).is_empty());
}

#[test]
fn test_multiple_h1_exempts_the_first() {
    let findings = check_headings(&parse("<h1>A</h1><h1>B</h1><h1>C</h1>"));
    assert_eq!(count(&findings, RuleId::HeadingMultipleH1), 2);
    assert_eq!(findings[0].code_snippet, "<h1>B</h1>");
    assert_eq!(findings[1].code_snippet, "<h1>C</h1>");
}

#[test]
fn test_multiplicity_precedes_hierarchy() {
    let findings = check_headings(&parse("<h1>A</h1><h3>B</h3><h1>C</h1>"));
    assert_eq!(
        ids(&findings),
        vec![RuleId::HeadingMultipleH1, RuleId::HeadingOrder]
    );
}

// ========== contrast ==========

#[test]
fn test_low_contrast_paragraph() {
    let findings = check_contrast(&parse(
        r#"<p style="color:#777;background-color:#fff">text</p>"#,
    ));
    assert_eq!(ids(&findings), vec![RuleId::ColorContrast]);
    assert_eq!(
        findings[0].message,
        "Low contrast ratio: 4.48. Minimum expected is 4.5."
    );
}

#[test]
fn test_black_on_white_passes() {
    let tree = parse(r#"<p style="color:#000;background-color:#fff">text</p>"#);
    assert!(check_contrast(&tree).is_empty());
}

#[test]
fn test_large_text_uses_lower_threshold() {
    let large = parse(r#"<p style="color:red;font-size:18px">big</p>"#);
    assert!(check_contrast(&large).is_empty());

    let bold = parse(r#"<p style="color:red;font-size:14px;font-weight:bold">bold</p>"#);
    assert!(check_contrast(&bold).is_empty());

    let small = check_contrast(&parse(r#"<p style="color:red;font-size:14px">small</p>"#));
    assert_eq!(small.len(), 1);
    assert_eq!(small[0].message, "Low contrast ratio: 4.00. Minimum expected is 4.5.");
}

#[test]
fn test_large_text_is_not_inherited() {
    let tree = parse(r#"<div style="font-size:24px"><p style="color:red">x</p></div>"#);
    assert_eq!(check_contrast(&tree).len(), 1);
}

#[test]
fn test_colors_inherit_from_ancestors() {
    let tree = parse(r#"<div style="background-color:#000"><p style="color:#333">dim</p></div>"#);
    let findings = check_contrast(&tree);
    assert_eq!(findings.len(), 1);
    assert_eq!(
        findings[0].message,
        "Low contrast ratio: 1.66. Minimum expected is 4.5."
    );
}

#[test]
fn test_nearest_color_wins() {
    let tree = parse(r#"<div style="color:#fff"><p style="color:#000">x</p></div>"#);
    assert!(check_contrast(&tree).is_empty());

    let inherited = parse(r#"<div style="color:#fff"><p>x</p></div>"#);
    assert_eq!(check_contrast(&inherited).len(), 1);
}

#[test]
fn test_background_shorthand_and_precedence() {
    let mut tree = DomTree::new();
    let outer = tree.append_element(
        NodeId::ROOT,
        "div",
        [("style", "background:#000;color:#fff")].into_iter().collect(),
    );
    let inner = tree.append_element(
        outer,
        "span",
        [("style", "background:#000;background-color:#fff")]
            .into_iter()
            .collect(),
    );
    let _ = tree.append_text(inner, "x");

    assert_eq!(colors_from_chain(&tree, inner), (Rgb::WHITE, Rgb::WHITE));
    assert_eq!(colors_from_chain(&tree, outer), (Rgb::WHITE, Rgb::BLACK));
}

#[test]
fn test_unresolved_colors_default_to_black_on_white() {
    let mut tree = DomTree::new();
    let p = tree.append_element(NodeId::ROOT, "p", Attributes::new());
    assert_eq!(colors_from_chain(&tree, p), (Rgb::BLACK, Rgb::WHITE));
}

#[test]
fn test_blank_text_elements_are_skipped() {
    let tree = parse(r#"<p style="color:#fff">   </p><span style="color:#fff"></span>"#);
    assert!(check_contrast(&tree).is_empty());
}

#[test]
fn test_non_text_tags_are_not_candidates() {
    let tree = parse(r#"<div style="color:#fff">white on white</div>"#);
    assert!(check_contrast(&tree).is_empty());
}

// ========== engine ==========

#[test]
fn test_empty_tree_yields_document_findings_only() {
    let findings = run_rules(&DomTree::new());
    assert_eq!(
        ids(&findings),
        vec![RuleId::DocLangMissing, RuleId::DocTitleMissing]
    );
}

#[test]
fn test_findings_follow_rule_group_order() {
    let tree = parse(
        r##"<html><body>
            <p style="color:#aaa">faint</p>
            <h1>One</h1><h3>Three</h3><h1>Again</h1>
            <a href="#">here</a>
            <img src="x.png">
        </body></html>"##,
    );
    assert_eq!(
        ids(&run_rules(&tree)),
        vec![
            RuleId::DocLangMissing,
            RuleId::DocTitleMissing,
            RuleId::ImgAltMissing,
            RuleId::LinkGenericText,
            RuleId::HeadingMultipleH1,
            RuleId::HeadingOrder,
            RuleId::ColorContrast,
        ]
    );
}

#[test]
fn test_clean_document_has_no_findings() {
    let tree = parse(
        r#"<!DOCTYPE html><html lang="en"><head><title>Shop</title></head>
        <body><h1>Shop</h1><h2>Deals</h2>
        <img src="a.png" alt="A red bicycle">
        <a href="/pricing">View pricing</a>
        <p style="color:#000;background:#fff">Welcome</p></body></html>"#,
    );
    assert!(run_rules(&tree).is_empty());
}

#[test]
fn test_engine_registry_order() {
    let engine = RuleEngine::new();
    let names: Vec<&str> = engine.rules().iter().map(|r| r.name).collect();
    assert_eq!(
        names,
        vec!["doc-lang", "doc-title", "images", "links", "headings", "contrast"]
    );
}

#[test]
fn test_deeply_nested_document_is_checked() {
    const DEPTH: usize = 30_000;
    let html = format!(
        r#"<html lang="en"><title>T</title><p style="color:#777">{}x</p>"#,
        "<abbr>".repeat(DEPTH)
    );
    let findings = run_rules(&parse(&html));

    assert_eq!(ids(&findings), vec![RuleId::ColorContrast]);
    assert_eq!(findings[0].element, "p");
    assert_eq!(
        findings[0].selector,
        "html > body:nth-of-type(1) > p:nth-of-type(1)"
    );
    assert_eq!(findings[0].code_snippet.chars().count(), 160);
    assert!(findings[0].code_snippet.starts_with(r#"<p style="color:#777"><abbr><abbr>"#));
    assert!(findings[0].code_snippet.ends_with("..."));
}

#[test]
fn test_engine_is_idempotent() {
    let tree = parse(r#"<h1>A</h1><h1>B</h1><img src="x"><p style="color:#999">c</p>"#);
    assert_eq!(run_rules(&tree), run_rules(&tree));
}
