//! Short, single-line markup snippets for findings.

use adacheck_dom::{DomTree, NodeId, outer_html};

/// Maximum snippet length in characters.
pub const MAX_SNIPPET_LEN: usize = 160;

const ELLIPSIS: &str = "...";

/// Serialize `node` with [`MAX_SNIPPET_LEN`] as the limit.
#[must_use]
pub fn extract_snippet(tree: &DomTree, node: NodeId) -> String {
    extract_snippet_with_limit(tree, node, MAX_SNIPPET_LEN)
}

/// Serialize `node` and its subtree, collapse whitespace runs to a single
/// space and trim. Longer results keep `max_len - 3` characters followed by
/// `...`.
#[must_use]
pub fn extract_snippet_with_limit(tree: &DomTree, node: NodeId, max_len: usize) -> String {
    shorten(&outer_html(tree, node), max_len)
}

/// Collapse whitespace and truncate `raw` to `max_len` characters.
#[must_use]
pub fn shorten(raw: &str, max_len: usize) -> String {
    let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.chars().count() <= max_len {
        return collapsed;
    }
    let mut truncated: String = collapsed
        .chars()
        .take(max_len.saturating_sub(ELLIPSIS.len()))
        .collect();
    truncated.push_str(ELLIPSIS);
    truncated
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_is_collapsed_and_trimmed() {
        assert_eq!(shorten("  <p>\n  a\t\tb </p>\n", 160), "<p> a b </p>");
    }

    #[test]
    fn test_exact_limit_is_not_truncated() {
        let raw = "x".repeat(160);
        assert_eq!(shorten(&raw, 160), raw);
    }

    #[test]
    fn test_truncation_counts_characters() {
        let raw = "é".repeat(200);
        let out = shorten(&raw, 160);
        assert_eq!(out.chars().count(), 160);
        assert!(out.ends_with("..."));
        assert!(out.starts_with(&"é".repeat(157)));
    }
}
