//! [WCAG 1.3.1 Info and Relationships](https://www.w3.org/WAI/WCAG21/Understanding/info-and-relationships),
//! applied to heading structure.

use adacheck_dom::{DomTree, NodeId};

use crate::finding::{Finding, RuleId};

const HEADING_TAGS: &[&str] = &["h1", "h2", "h3", "h4", "h5", "h6"];

/// Numeric level of a heading tag (`h3` → 3).
fn heading_level(tag: &str) -> Option<u8> {
    tag.strip_prefix('h')?.parse().ok()
}

/// Check heading multiplicity and hierarchy.
///
/// Every `<h1>` after the first is reported as
/// [`RuleId::HeadingMultipleH1`]. Then, walking headings in document order,
/// a heading more than one level deeper than the previous heading is
/// reported as [`RuleId::HeadingOrder`]. The previous level always becomes
/// the current one, so a run of headings at a skipped-to level is reported
/// once. Going back up never triggers.
#[must_use]
pub fn check_headings(tree: &DomTree) -> Vec<Finding> {
    let headings: Vec<(NodeId, u8)> = tree
        .elements_by_tag(HEADING_TAGS)
        .filter_map(|id| Some((id, heading_level(tree.tag_name(id)?)?)))
        .collect();

    let mut findings: Vec<Finding> = headings
        .iter()
        .filter(|&&(_, level)| level == 1)
        .skip(1)
        .map(|&(id, _)| {
            Finding::at(
                tree,
                id,
                RuleId::HeadingMultipleH1,
                "There must be only one <h1> per page.",
            )
        })
        .collect();

    let mut last_level = 0;
    for &(id, level) in &headings {
        if last_level != 0 && level > last_level + 1 {
            findings.push(Finding::at(
                tree,
                id,
                RuleId::HeadingOrder,
                format!("Heading level skipped: found <h{level}> after <h{last_level}>."),
            ));
        }
        last_level = level;
    }

    findings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_level() {
        assert_eq!(heading_level("h1"), Some(1));
        assert_eq!(heading_level("h6"), Some(6));
        assert_eq!(heading_level("hr"), None);
        assert_eq!(heading_level("p"), None);
    }
}
