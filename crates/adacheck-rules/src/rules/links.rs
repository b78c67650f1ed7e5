//! [WCAG 2.4.4 Link Purpose (In Context)](https://www.w3.org/WAI/WCAG21/Understanding/link-purpose-in-context)

use adacheck_dom::DomTree;

use crate::finding::{Finding, RuleId};

/// Link texts that say nothing about the destination.
pub const GENERIC_PHRASES: &[&str] = &[
    "click here",
    "read more",
    "more",
    "here",
    "learn more",
    "details",
    "link",
];

/// Report every `<a>` whose trimmed, lowercased text is exactly one of
/// [`GENERIC_PHRASES`].
#[must_use]
pub fn check_links(tree: &DomTree) -> Vec<Finding> {
    tree.elements_by_tag(&["a"])
        .filter(|&a| {
            let text = tree.text_content(a).trim().to_lowercase();
            GENERIC_PHRASES.contains(&text.as_str())
        })
        .map(|a| {
            Finding::at(
                tree,
                a,
                RuleId::LinkGenericText,
                "Link text must be descriptive (avoid generic phrases like 'click here').",
            )
        })
        .collect()
}
