//! [WCAG 1.1.1 Non-text Content](https://www.w3.org/WAI/WCAG21/Understanding/non-text-content)

use adacheck_dom::DomTree;

use crate::finding::{Finding, RuleId};

/// Longest acceptable `alt` text, in characters.
pub const MAX_ALT_LENGTH: usize = 120;

/// Check every `<img>` in document order.
///
/// A missing or blank `alt` is reported as [`RuleId::ImgAltMissing`];
/// otherwise an `alt` longer than [`MAX_ALT_LENGTH`] characters (untrimmed)
/// is reported as [`RuleId::ImgAltLength`].
#[must_use]
pub fn check_images(tree: &DomTree) -> Vec<Finding> {
    tree.elements_by_tag(&["img"])
        .filter_map(|img| {
            let rule_id = match tree.attr(img, "alt") {
                None => RuleId::ImgAltMissing,
                Some(alt) if alt.trim().is_empty() => RuleId::ImgAltMissing,
                Some(alt) if alt.chars().count() > MAX_ALT_LENGTH => RuleId::ImgAltLength,
                Some(_) => return None,
            };
            let message = match rule_id {
                RuleId::ImgAltLength => "Alt text should not exceed 120 characters.",
                _ => "All <img> tags must have a descriptive alt attribute.",
            };
            Some(Finding::at(tree, img, rule_id, message))
        })
        .collect()
}
