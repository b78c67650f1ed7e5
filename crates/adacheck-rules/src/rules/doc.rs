//! [WCAG 3.1.1 Language of Page](https://www.w3.org/WAI/WCAG21/Understanding/language-of-page)
//! and [WCAG 2.4.2 Page Titled](https://www.w3.org/WAI/WCAG21/Understanding/page-titled).
//!
//! Both rules report at most one finding with a fixed locator, since the
//! offending element may not exist at all.

use adacheck_dom::DomTree;

use crate::finding::{Finding, RuleId};

/// Report a missing or blank `lang` on the first `<html>` element.
#[must_use]
pub fn check_doc_lang(tree: &DomTree) -> Vec<Finding> {
    let has_lang = tree
        .first_element_by_tag("html")
        .and_then(|html| tree.attr(html, "lang"))
        .is_some_and(|lang| !lang.trim().is_empty());
    if has_lang {
        return Vec::new();
    }

    vec![Finding {
        rule_id: RuleId::DocLangMissing,
        message: "The <html> element must have a valid lang attribute.".to_string(),
        element: "html".to_string(),
        selector: "html".to_string(),
        code_snippet: "<html ...>".to_string(),
    }]
}

/// Report a missing `<title>` or one whose text is blank.
#[must_use]
pub fn check_doc_title(tree: &DomTree) -> Vec<Finding> {
    let has_title = tree
        .first_element_by_tag("title")
        .is_some_and(|title| !tree.text_content(title).trim().is_empty());
    if has_title {
        return Vec::new();
    }

    vec![Finding {
        rule_id: RuleId::DocTitleMissing,
        message: "Every page must have a non-empty <title> tag.".to_string(),
        element: "title".to_string(),
        selector: "html > head > title:nth-of-type(1)".to_string(),
        code_snippet: "<title></title>".to_string(),
    }]
}
