//! Path-style selectors such as `html > body:nth-of-type(1) > p:nth-of-type(2)`.
//!
//! [Selectors Level 4 § 14.3.3 `:nth-of-type()`](https://www.w3.org/TR/selectors-4/#nth-of-type-pseudo)

use adacheck_dom::{DomTree, NodeId};

/// Build a selector for `node` by walking up to its root element.
///
/// Every step below the root is written `tag:nth-of-type(k)`, where `k` is
/// the 1-based position among the parent's direct element children with
/// the same tag. The root element (whose parent is the Document, or nothing)
/// is written as its bare tag name. Segments are joined root-first with
/// `" > "`.
#[must_use]
pub fn build_selector(tree: &DomTree, node: NodeId) -> String {
    let mut parts = Vec::new();
    let mut current = Some(node);

    while let Some(id) = current {
        let Some(tag) = tree.tag_name(id) else {
            break;
        };
        let Some(parent) = tree.parent(id).filter(|&p| tree.as_element(p).is_some()) else {
            parts.push(tag.to_string());
            break;
        };
        parts.push(format!("{tag}:nth-of-type({})", nth_of_type(tree, parent, id, tag)));
        current = Some(parent);
    }

    if parts.is_empty() {
        return tree.tag_name(node).unwrap_or_default().to_string();
    }
    parts.reverse();
    parts.join(" > ")
}

/// 1-based index of `id` among the same-tag element children of `parent`,
/// or 1 when it is not one of them.
fn nth_of_type(tree: &DomTree, parent: NodeId, id: NodeId, tag: &str) -> usize {
    tree.element_children(parent)
        .filter(|&child| tree.tag_name(child) == Some(tag))
        .position(|child| child == id)
        .map_or(1, |index| index + 1)
}
