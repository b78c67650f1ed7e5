//! [WCAG 1.4.3 Contrast (Minimum)](https://www.w3.org/WAI/WCAG21/Understanding/contrast-minimum)
//!
//! Colors come from inline `style` attributes only. The foreground and
//! background are each taken from the nearest element (self first) that
//! declares them, defaulting to black on white.

use adacheck_dom::{DomTree, NodeId};

use crate::color::{Rgb, contrast_ratio, parse_color};
use crate::finding::{Finding, RuleId};
use crate::style::{is_large_text, parse_inline_style};

/// Elements whose text is checked.
pub const TEXT_TAGS: &[&str] = &[
    "p", "span", "a", "li", "h1", "h2", "h3", "h4", "h5", "h6",
];

/// Minimum contrast ratio for normal text (AA).
pub const NORMAL_TEXT_MIN_RATIO: f64 = 4.5;

/// Minimum contrast ratio for large text (AA).
pub const LARGE_TEXT_MIN_RATIO: f64 = 3.0;

/// Report text elements whose contrast ratio is below the minimum.
///
/// Elements with blank text are skipped. The threshold depends on the
/// element's own inline style only; font size is not inherited.
#[must_use]
pub fn check_contrast(tree: &DomTree) -> Vec<Finding> {
    tree.elements_by_tag(TEXT_TAGS)
        .filter_map(|id| evaluate(tree, id))
        .collect()
}

fn evaluate(tree: &DomTree, id: NodeId) -> Option<Finding> {
    if tree.text_content(id).trim().is_empty() {
        return None;
    }

    let own_style = parse_inline_style(tree.attr(id, "style").unwrap_or_default());
    let (foreground, background) = colors_from_chain(tree, id);
    let ratio = contrast_ratio(foreground, background);
    let threshold = if is_large_text(&own_style) {
        LARGE_TEXT_MIN_RATIO
    } else {
        NORMAL_TEXT_MIN_RATIO
    };

    (ratio < threshold).then(|| {
        Finding::at(
            tree,
            id,
            RuleId::ColorContrast,
            format!("Low contrast ratio: {ratio:.2}. Minimum expected is {threshold:.1}."),
        )
    })
}

/// Resolve the `(foreground, background)` pair for `id`.
///
/// Walks from `id` up through its element ancestors. The first `color`
/// seen is the foreground; the first `background-color` or `background`
/// seen is the background (on one element, a non-empty `background-color`
/// wins). The walk stops as soon as both are known. Unresolved colors
/// default to black text on a white background.
#[must_use]
pub fn colors_from_chain(tree: &DomTree, id: NodeId) -> (Rgb, Rgb) {
    let mut foreground = None;
    let mut background = None;

    for node in tree.ancestors_or_self(id) {
        let Some(element) = tree.as_element(node) else {
            break;
        };
        let style = parse_inline_style(element.attr("style").unwrap_or_default());

        if foreground.is_none()
            && let Some(color) = style.get("color")
        {
            foreground = Some(parse_color(color));
        }

        if background.is_none()
            && (style.contains_key("background-color") || style.contains_key("background"))
        {
            let value = style
                .get("background-color")
                .filter(|v| !v.is_empty())
                .or_else(|| style.get("background"))
                .map_or("", String::as_str);
            background = Some(parse_color(value));
        }

        if foreground.is_some() && background.is_some() {
            break;
        }
    }

    (
        foreground.unwrap_or(Rgb::BLACK),
        background.unwrap_or(Rgb::WHITE),
    )
}
